//! 距離、平均速度與消耗熱量的計算公式。
//!
//! All functions are pure. Callers guarantee that `duration_hours` and
//! `height_cm` are strictly positive; [`WorkoutRecord`](super::model::WorkoutRecord)
//! enforces this when a record is constructed.

/// Distance covered by one running or walking step, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Distance covered by one swimming stroke, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;
pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 20.0;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIMMING_SPEED_SHIFT: f64 = 1.1;
const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

pub fn distance_km(action_count: u64, action_length_m: f64) -> f64 {
    action_count as f64 * action_length_m / METERS_PER_KM
}

pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

/// Swimming speed comes from the pool lengths swum, not from the stroke count.
pub fn pool_mean_speed_kmh(pool_length_m: f64, pool_lengths_count: f64, duration_hours: f64) -> f64 {
    pool_length_m * pool_lengths_count / METERS_PER_KM / duration_hours
}

pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (RUNNING_SPEED_MULTIPLIER * mean_speed_kmh - RUNNING_SPEED_SHIFT) * weight_kg / METERS_PER_KM
        * duration_hours
        * MINUTES_PER_HOUR
}

/// Floor division on floats, computed from the exact remainder so that a
/// quotient rounding up to a whole number is not counted (`1.0 // 0.1 == 9.0`).
pub fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// The speed term is floor-divided by height: `speed^2 // height`.
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    let speed_by_height = floor_div(mean_speed_kmh.powi(2), height_cm);

    (WALKING_WEIGHT_MULTIPLIER * weight_kg
        + speed_by_height * WALKING_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * (duration_hours * MINUTES_PER_HOUR)
}

pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + SWIMMING_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * weight_kg
}
