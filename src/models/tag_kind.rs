use serde::Serialize;

/// Display category of an event, resolved once from its free-text tag.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Holiday,
    Birthday,
    Generic,
}

impl TagKind {
    /// "feriado" wins over "cumple" when a tag mentions both.
    pub fn from_tag(tag: &str) -> Self {
        let norm = tag.to_lowercase();
        if norm.contains("feriado") {
            TagKind::Holiday
        } else if norm.contains("cumple") {
            TagKind::Birthday
        } else {
            TagKind::Generic
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TagKind::Holiday => "🦙",
            TagKind::Birthday => "🎂",
            TagKind::Generic => "📌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Holiday => "holiday",
            TagKind::Birthday => "birthday",
            TagKind::Generic => "generic",
        }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, TagKind::Holiday)
    }
}

/// Hover label for the icon: the raw tag, or "Evento" when empty.
pub fn icon_label(tag: &str) -> String {
    if tag.is_empty() {
        "Evento".to_string()
    } else {
        tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_case_insensitively() {
        assert_eq!(TagKind::from_tag("Feriado nacional"), TagKind::Holiday);
        assert_eq!(TagKind::from_tag("CUMPLEAÑOS"), TagKind::Birthday);
        assert_eq!(TagKind::from_tag("carrera"), TagKind::Generic);
        assert_eq!(TagKind::from_tag(""), TagKind::Generic);
    }

    #[test]
    fn holiday_takes_precedence() {
        assert_eq!(TagKind::from_tag("cumple feriado"), TagKind::Holiday);
    }

    #[test]
    fn icons_and_labels() {
        assert_eq!(TagKind::Birthday.icon(), "🎂");
        assert_eq!(icon_label(""), "Evento");
        assert_eq!(icon_label("feriado"), "feriado");
    }
}
