pub const EARTH_RADIUS_KILOMETERS: f64 = 6_371.0;

pub(crate) const DEFAULT_HEAP_CAPACITY: usize = 64;
