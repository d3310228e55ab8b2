//! Easing functions applied inside breakpoint segments

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    /// Hold the segment's start value until the next breakpoint is reached
    Step,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                let x = Polynomial::new(*x1, *x2);
                let y = Polynomial::new(*y1, *y2);
                y.at(x.solve(t as f64)) as f32
            }
        }
    }
}

/// One axis of a CSS cubic bezier with endpoints fixed at 0 and 1,
/// `B(s) = ((a*s + b)*s + c)*s`
struct Polynomial {
    a: f64,
    b: f64,
    c: f64,
}

impl Polynomial {
    fn new(p1: f32, p2: f32) -> Self {
        let (p1, p2) = (p1 as f64, p2 as f64);
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn at(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn derivative(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Parameter `s` with `B(s) == x`; Newton first, bisection if it stalls
    fn solve(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        let mut s = x;
        for _ in 0..8 {
            let err = self.at(s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let d = self.derivative(s);
            if d.abs() < EPSILON {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        while hi - lo > EPSILON {
            let v = self.at(s);
            if (v - x).abs() < EPSILON {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        s
    }
}
