use stylist::Style;
use yew::Classes;

use crate::error::DomError;

/// Mounts `css` as a scoped stylesheet and returns its generated class next to
/// `base`. If the sheet can't be built the element keeps only `base`.
pub fn scoped(base: &'static str, css: &str) -> Classes {
    match Style::new(css).map_err(|err| DomError::Style(err.to_string())) {
        Ok(style) => {
            let mut classes = Classes::from(base);
            classes.push(style.get_class_name().to_string());
            classes
        }
        Err(err) => {
            log::error!("{}: {}", base, err);
            Classes::from(base)
        }
    }
}
