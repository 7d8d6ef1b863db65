//! Typed single-field edits on a sprite.
//!
//! Every editable scalar on [`SpriteItem`] has a variant here carrying a value
//! of the field's own type, so an edit can only ever name a field that exists.

use super::item::{PointOffset, RectSource, SpriteItem};

/// Component of a [`PointOffset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointField {
    X,
    Y,
}

impl PointField {
    pub fn all() -> &'static [PointField] {
        &[PointField::X, PointField::Y]
    }

    pub fn key(&self) -> &'static str {
        match self {
            PointField::X => "x",
            PointField::Y => "y",
        }
    }

    fn get(&self, point: &PointOffset) -> i32 {
        match self {
            PointField::X => point.x,
            PointField::Y => point.y,
        }
    }

    fn set(&self, point: &mut PointOffset, value: i32) {
        match self {
            PointField::X => point.x = value,
            PointField::Y => point.y = value,
        }
    }
}

/// Component of a [`RectSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectField {
    X,
    Y,
    Width,
    Height,
}

impl RectField {
    pub fn all() -> &'static [RectField] {
        &[RectField::X, RectField::Y, RectField::Width, RectField::Height]
    }

    pub fn key(&self) -> &'static str {
        match self {
            RectField::X => "x",
            RectField::Y => "y",
            RectField::Width => "width",
            RectField::Height => "height",
        }
    }

    fn get(&self, rect: &RectSource) -> i32 {
        match self {
            RectField::X => rect.x,
            RectField::Y => rect.y,
            RectField::Width => rect.width,
            RectField::Height => rect.height,
        }
    }

    fn set(&self, rect: &mut RectSource, value: i32) {
        match self {
            RectField::X => rect.x = value,
            RectField::Y => rect.y = value,
            RectField::Width => rect.width = value,
            RectField::Height => rect.height = value,
        }
    }
}

/// One sprite field together with a value for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteProperty {
    Name(String),
    YSort(i32),
    Fragile(bool),
    Breakable(bool),
    Offset(PointField, i32),
    ShadowOffset(PointField, i32),
    Source(RectField, i32),
    ShadowSource(RectField, i32),
    BreakingSource(RectField, i32),
    BreakingOffset(PointField, i32),
    BreakingXInverted(i32),
    BreakingFrameDuration(i32),
    BreakingFrameCount(i32),
}

impl SpriteProperty {
    /// Dotted path of the field, e.g. `source.x`
    pub fn path(&self) -> String {
        match self {
            SpriteProperty::Name(_) => "name".to_string(),
            SpriteProperty::YSort(_) => "ySort".to_string(),
            SpriteProperty::Fragile(_) => "fragile".to_string(),
            SpriteProperty::Breakable(_) => "breakable".to_string(),
            SpriteProperty::Offset(f, _) => format!("offset.{}", f.key()),
            SpriteProperty::ShadowOffset(f, _) => format!("shadowOffset.{}", f.key()),
            SpriteProperty::Source(f, _) => format!("source.{}", f.key()),
            SpriteProperty::ShadowSource(f, _) => format!("shadowSource.{}", f.key()),
            SpriteProperty::BreakingSource(f, _) => {
                format!("breakingAnimation.source.{}", f.key())
            }
            SpriteProperty::BreakingOffset(f, _) => {
                format!("breakingAnimation.offset.{}", f.key())
            }
            SpriteProperty::BreakingXInverted(_) => "breakingAnimation.xInverted".to_string(),
            SpriteProperty::BreakingFrameDuration(_) => {
                "breakingAnimation.frameDuration".to_string()
            }
            SpriteProperty::BreakingFrameCount(_) => "breakingAnimation.nbFrames".to_string(),
        }
    }

    /// Value of an integer field, `None` for text and boolean fields
    pub fn as_int(&self) -> Option<i32> {
        match self {
            SpriteProperty::YSort(v)
            | SpriteProperty::Offset(_, v)
            | SpriteProperty::ShadowOffset(_, v)
            | SpriteProperty::Source(_, v)
            | SpriteProperty::ShadowSource(_, v)
            | SpriteProperty::BreakingSource(_, v)
            | SpriteProperty::BreakingOffset(_, v)
            | SpriteProperty::BreakingXInverted(v)
            | SpriteProperty::BreakingFrameDuration(v)
            | SpriteProperty::BreakingFrameCount(v) => Some(*v),
            SpriteProperty::Name(_) | SpriteProperty::Fragile(_) | SpriteProperty::Breakable(_) => {
                None
            }
        }
    }

    /// Same field with `value`. Text and boolean fields are returned unchanged.
    pub fn with_int(&self, value: i32) -> SpriteProperty {
        match self {
            SpriteProperty::YSort(_) => SpriteProperty::YSort(value),
            SpriteProperty::Offset(f, _) => SpriteProperty::Offset(*f, value),
            SpriteProperty::ShadowOffset(f, _) => SpriteProperty::ShadowOffset(*f, value),
            SpriteProperty::Source(f, _) => SpriteProperty::Source(*f, value),
            SpriteProperty::ShadowSource(f, _) => SpriteProperty::ShadowSource(*f, value),
            SpriteProperty::BreakingSource(f, _) => SpriteProperty::BreakingSource(*f, value),
            SpriteProperty::BreakingOffset(f, _) => SpriteProperty::BreakingOffset(*f, value),
            SpriteProperty::BreakingXInverted(_) => SpriteProperty::BreakingXInverted(value),
            SpriteProperty::BreakingFrameDuration(_) => {
                SpriteProperty::BreakingFrameDuration(value)
            }
            SpriteProperty::BreakingFrameCount(_) => SpriteProperty::BreakingFrameCount(value),
            other => other.clone(),
        }
    }

    /// True when both values address the same field, whatever their values
    pub fn same_field(&self, other: &SpriteProperty) -> bool {
        use SpriteProperty::*;
        match (self, other) {
            (Offset(a, _), Offset(b, _))
            | (ShadowOffset(a, _), ShadowOffset(b, _))
            | (BreakingOffset(a, _), BreakingOffset(b, _)) => a == b,
            (Source(a, _), Source(b, _))
            | (ShadowSource(a, _), ShadowSource(b, _))
            | (BreakingSource(a, _), BreakingSource(b, _)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl SpriteItem {
    /// Current value of the field that `key` names. The value carried by
    /// `key` itself is ignored.
    pub fn property(&self, key: &SpriteProperty) -> SpriteProperty {
        let anim = &self.breaking_animation;
        match key {
            SpriteProperty::Name(_) => SpriteProperty::Name(self.name.clone()),
            SpriteProperty::YSort(_) => SpriteProperty::YSort(self.y_sort),
            SpriteProperty::Fragile(_) => SpriteProperty::Fragile(self.fragile),
            SpriteProperty::Breakable(_) => SpriteProperty::Breakable(self.breakable),
            SpriteProperty::Offset(f, _) => SpriteProperty::Offset(*f, f.get(&self.offset)),
            SpriteProperty::ShadowOffset(f, _) => {
                SpriteProperty::ShadowOffset(*f, f.get(&self.shadow_offset))
            }
            SpriteProperty::Source(f, _) => SpriteProperty::Source(*f, f.get(&self.source)),
            SpriteProperty::ShadowSource(f, _) => {
                SpriteProperty::ShadowSource(*f, f.get(&self.shadow_source))
            }
            SpriteProperty::BreakingSource(f, _) => {
                SpriteProperty::BreakingSource(*f, f.get(&anim.source))
            }
            SpriteProperty::BreakingOffset(f, _) => {
                SpriteProperty::BreakingOffset(*f, f.get(&anim.offset))
            }
            SpriteProperty::BreakingXInverted(_) => SpriteProperty::BreakingXInverted(anim.x_inverted),
            SpriteProperty::BreakingFrameDuration(_) => {
                SpriteProperty::BreakingFrameDuration(anim.frame_duration)
            }
            SpriteProperty::BreakingFrameCount(_) => {
                SpriteProperty::BreakingFrameCount(anim.frame_count)
            }
        }
    }

    /// Write a single field
    pub fn apply(&mut self, value: &SpriteProperty) {
        let anim = &mut self.breaking_animation;
        match value {
            SpriteProperty::Name(v) => self.name = v.clone(),
            SpriteProperty::YSort(v) => self.y_sort = *v,
            SpriteProperty::Fragile(v) => self.fragile = *v,
            SpriteProperty::Breakable(v) => self.breakable = *v,
            SpriteProperty::Offset(f, v) => f.set(&mut self.offset, *v),
            SpriteProperty::ShadowOffset(f, v) => f.set(&mut self.shadow_offset, *v),
            SpriteProperty::Source(f, v) => f.set(&mut self.source, *v),
            SpriteProperty::ShadowSource(f, v) => f.set(&mut self.shadow_source, *v),
            SpriteProperty::BreakingSource(f, v) => f.set(&mut anim.source, *v),
            SpriteProperty::BreakingOffset(f, v) => f.set(&mut anim.offset, *v),
            SpriteProperty::BreakingXInverted(v) => anim.x_inverted = *v,
            SpriteProperty::BreakingFrameDuration(v) => anim.frame_duration = *v,
            SpriteProperty::BreakingFrameCount(v) => anim.frame_count = *v,
        }
    }
}
