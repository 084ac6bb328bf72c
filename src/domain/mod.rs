// Domain layer: the closed set of operations and the record of one call.

pub mod model;
