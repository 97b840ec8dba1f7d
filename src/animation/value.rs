use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{TweenError, TweenResult};

/// Opaque handle to a sprite/surface. Never interpolated, only swapped or held.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AssetId(pub u32);

/// A keyframe value. The variant selects the blend function.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Scalar(f64),
    Tuple(Vec<Value>), // fixed arity; points are 2-tuples of scalars
    Color(Rgba8),
    Asset(AssetId),
}

impl Value {
    pub fn point(x: f64, y: f64) -> Self {
        Self::Tuple(vec![Self::Scalar(x), Self::Scalar(y)])
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Tuple(_) => "tuple",
            Self::Color(_) => "color",
            Self::Asset(_) => "asset",
        }
    }

    pub fn as_scalar(&self) -> TweenResult<f64> {
        match self {
            Self::Scalar(v) => Ok(*v),
            other => Err(TweenError::unsupported(format!(
                "expected scalar, got {}",
                other.kind_name()
            ))),
        }
    }

    pub fn as_point(&self) -> TweenResult<Point> {
        match self {
            Self::Tuple(items) => match items.as_slice() {
                [x, y] => Ok(Point::new(x.as_scalar()?, y.as_scalar()?)),
                _ => Err(TweenError::Arity {
                    left: items.len(),
                    right: 2,
                }),
            },
            other => Err(TweenError::unsupported(format!(
                "expected point, got {}",
                other.kind_name()
            ))),
        }
    }

    pub fn as_asset(&self) -> TweenResult<AssetId> {
        match self {
            Self::Asset(id) => Ok(*id),
            other => Err(TweenError::unsupported(format!(
                "expected asset, got {}",
                other.kind_name()
            ))),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Scalar(f64::from(v))
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Self::point(p.x, p.y)
    }
}

impl From<Rgba8> for Value {
    fn from(c: Rgba8) -> Self {
        Self::Color(c)
    }
}

impl From<AssetId> for Value {
    fn from(id: AssetId) -> Self {
        Self::Asset(id)
    }
}
