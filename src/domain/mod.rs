// Domain layer: the two ordered maps and their file row types.

pub mod model;
