use crate::error::DomError;

/// Hero transform for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    /// Downward shift of the background media, in percent of its height.
    pub media_shift_pct: f64,
    /// Opacity of the headline block.
    pub content_opacity: f64,
}

impl Parallax {
    pub const AT_REST: Parallax = Parallax {
        media_shift_pct: 0.0,
        content_opacity: 1.0,
    };

    /// Progress runs from the hero's top touching the viewport top (0) to its
    /// bottom leaving it (1).
    pub fn at(scroll_y: f64, hero_height: f64) -> Self {
        if hero_height <= 0.0 {
            return Self::AT_REST;
        }
        let progress = (scroll_y / hero_height).clamp(0.0, 1.0);
        Self {
            media_shift_pct: progress * 50.0,
            content_opacity: 1.0 - progress,
        }
    }

    /// Starting transform for a page that may have been restored mid-scroll.
    /// An unreadable offset counts as the top of the page.
    pub fn restored(offset: Result<f64, DomError>, hero_height: f64) -> Self {
        match offset {
            Ok(offset) => Self::at(offset, hero_height),
            Err(err) => {
                log::warn!("hero parallax: {}", err);
                Self::AT_REST
            }
        }
    }

    pub fn media_style(&self) -> String {
        format!("transform: translateY({:.2}%);", self.media_shift_pct)
    }

    pub fn content_style(&self) -> String {
        format!("opacity: {:.3};", self.content_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_at_rest() {
        assert_eq!(Parallax::at(0.0, 900.0), Parallax::AT_REST);
    }

    #[test]
    fn halfway_through_the_hero() {
        let parallax = Parallax::at(450.0, 900.0);
        assert_eq!(parallax.media_shift_pct, 25.0);
        assert_eq!(parallax.content_opacity, 0.5);
        assert_eq!(parallax.media_style(), "transform: translateY(25.00%);");
        assert_eq!(parallax.content_style(), "opacity: 0.500;");
    }

    #[test]
    fn clamps_past_the_hero() {
        let parallax = Parallax::at(5000.0, 900.0);
        assert_eq!(parallax.media_shift_pct, 50.0);
        assert_eq!(parallax.content_opacity, 0.0);
    }

    #[test]
    fn restored_page_starts_at_its_offset() {
        assert_eq!(Parallax::restored(Ok(450.0), 900.0), Parallax::at(450.0, 900.0));
        assert_eq!(Parallax::restored(Ok(0.0), 900.0), Parallax::AT_REST);
    }

    #[test]
    fn unreadable_offset_starts_at_rest() {
        assert_eq!(
            Parallax::restored(Err(DomError::NoWindow), 900.0),
            Parallax::AT_REST
        );
    }

    #[test]
    fn unmeasured_hero_stays_at_rest() {
        assert_eq!(Parallax::at(300.0, 0.0), Parallax::AT_REST);
    }
}
