use std::{cmp::Ordering, fmt, iter::Sum, marker::PhantomData, ops::Add};

use serde::{Serialize, Serializer};

pub trait DistanceUnit: Copy + Eq {
    const NAME: &'static str;
    const NANOMETERS_IN_UNIT: i128;
}

/// Fixed-point distance stored as whole nanometers, so that adding edge
/// weights together is exact and distances are totally ordered. The i128
/// range covers about 1.7e26 kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance<T: DistanceUnit> {
    nm: i128,
    unit: PhantomData<T>,
}

macro_rules! create_distance_unit {
    ($struct_name:ident, $string_name:expr , $nm_conv:expr) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub struct $struct_name; // unit-like struct

        impl DistanceUnit for $struct_name {
            const NAME: &'static str = $string_name;
            const NANOMETERS_IN_UNIT: i128 = $nm_conv;
        }
    };
}

create_distance_unit!(Kilometers, "kilometer", 1_000_000_000_000);

impl<T: DistanceUnit> Distance<T> {
    pub const fn zero() -> Self {
        Distance {
            nm: 0,
            unit: PhantomData,
        }
    }

    /// Converts without ever rounding up, used for heuristic estimates which
    /// must not exceed the true remaining cost.
    pub fn from_value_floor(value: f64) -> Self {
        Distance {
            nm: (value * (T::NANOMETERS_IN_UNIT as f64)).floor() as i128,
            unit: PhantomData,
        }
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        (self.nm as f64) / (T::NANOMETERS_IN_UNIT as f64)
    }

    pub fn checked_add(self, other: Distance<T>) -> Option<Distance<T>> {
        self.nm.checked_add(other.nm).map(|nm| Distance {
            nm,
            unit: PhantomData,
        })
    }

    pub fn saturating_add(self, other: Distance<T>) -> Distance<T> {
        Distance {
            nm: self.nm.saturating_add(other.nm),
            unit: PhantomData,
        }
    }
}

impl<T> From<Distance<T>> for f64
where
    T: DistanceUnit,
{
    fn from(value: Distance<T>) -> Self {
        value.value()
    }
}

impl<T> fmt::Display for Distance<T>
where
    T: DistanceUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value();

        write!(
            f,
            "{:.2} {}{}",
            value,
            T::NAME,
            match value {
                1_f64 => "",
                _ => "s",
            }
        )
    }
}

impl<T: DistanceUnit> Serialize for Distance<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<T> Ord for Distance<T>
where
    T: DistanceUnit,
{
    fn cmp(&self, other: &Distance<T>) -> Ordering {
        self.nm.cmp(&other.nm)
    }
}

impl<T> PartialOrd for Distance<T>
where
    T: DistanceUnit,
{
    fn partial_cmp(&self, other: &Distance<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> From<f64> for Distance<T>
where
    T: DistanceUnit,
{
    fn from(value: f64) -> Self {
        Distance {
            nm: (value * (T::NANOMETERS_IN_UNIT as f64)).round() as i128,
            unit: PhantomData,
        }
    }
}

impl<T> Add for Distance<T>
where
    T: DistanceUnit,
{
    type Output = Distance<T>;

    fn add(self, other: Distance<T>) -> Distance<T> {
        Distance {
            nm: self.nm + other.nm,
            unit: PhantomData,
        }
    }
}

impl<T: DistanceUnit> Sum for Distance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Distance::zero(), |acc, distance| acc + distance)
    }
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Kilometers>::from($num as f64)
    };
}
