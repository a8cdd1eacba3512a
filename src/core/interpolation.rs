use num_traits::Float;
use std::ops::{Add, Mul, Sub};

/// Blends two values, given a weight `alpha` on [0, 1].
pub trait Interpolator<T, V>
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
{
    fn interpolate(&self, alpha: T, a: &V, b: &V) -> V;
}

/// Pairs a query (on [0, 1]) with the value produced at that query.
#[derive(Clone, Copy, Debug)]
pub struct InterpolationKeyframe<T, V> {
    pub input: T,
    pub output: V,
}

/// Piecewise interpolation between keyframes. Queries outside of [0, 1]
/// are clamped to the first or last keyframe.
pub struct KeyframeInterpolator<T, V, F>
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
    F: Interpolator<T, V>,
{
    queries: Vec<T>,
    values: Vec<V>,
    interpolator: F,
}

impl<T, V, F> KeyframeInterpolator<T, V, F>
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
    F: Interpolator<T, V>,
{
    pub fn new(keyframes: Vec<InterpolationKeyframe<T, V>>, interpolator: F) -> Self {
        assert!(!keyframes.is_empty(), "keyframes must not be empty");
        assert!(
            keyframes[0].input == T::zero(),
            "first keyframe input must be 0.0"
        );
        assert!(
            keyframes[keyframes.len() - 1].input == T::one(),
            "last keyframe input must be 1.0"
        );
        for pair in keyframes.windows(2) {
            assert!(
                pair[0].input < pair[1].input,
                "keyframes must be strictly increasing"
            );
        }

        let (queries, values) = keyframes.iter().map(|k| (k.input, k.output)).unzip();

        Self {
            queries,
            values,
            interpolator,
        }
    }

    pub fn evaluate(&self, query: T) -> V {
        let last = self.values.len() - 1;
        if query <= T::zero() {
            self.values[0]
        } else if query >= T::one() {
            self.values[last]
        } else {
            let idx_upp = self.queries.partition_point(|q| query >= *q);
            let idx_low = idx_upp - 1;
            let val_low = self.queries[idx_low];
            let alpha = (query - val_low) / (self.queries[idx_upp] - val_low);
            self.interpolator
                .interpolate(alpha, &self.values[idx_low], &self.values[idx_upp])
        }
    }
}

/// Linear interpolation: a * (1 - alpha) + b * alpha
#[derive(Default, Clone, Copy, Debug)]
pub struct LinearInterpolator;

impl<T, V> Interpolator<T, V> for LinearInterpolator
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
{
    fn interpolate(&self, alpha: T, a: &V, b: &V) -> V {
        *a + (*b - *a) * alpha
    }
}
