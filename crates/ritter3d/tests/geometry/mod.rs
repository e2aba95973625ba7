mod ritter_sphere_inputs;
