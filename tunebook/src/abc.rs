//! Rendering tunes as ABC notation

use crate::{Tune, mode};
use std::{
    borrow::Cow,
    fmt,
    io::{self, Write},
};

/// A single `<tag>:<value>` line in the header of an ABC tune
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField<'a> {
    /// The field letter, e.g. `X` or `T`
    pub tag: char,

    /// Everything after the colon
    pub value: Cow<'a, str>,
}

impl<'a> HeaderField<'a> {
    /// Create a header field
    pub fn new(tag: char, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }
}

impl fmt::Display for HeaderField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.tag, self.value)
    }
}

impl Tune {
    /// The header fields of the tune, in the order they are written
    ///
    /// `X` (reference number) and `T` (title) always come first, followed by rhythm, meter and
    /// key. The transcriber (`Z`) and history (`H`) fields are only present when the tune carries
    /// a username or date.
    pub fn header(&self) -> Vec<HeaderField<'_>> {
        let mut fields = vec![
            HeaderField::new('X', self.setting_id.as_str()),
            HeaderField::new('T', self.name.as_str()),
            HeaderField::new('R', self.kind.as_str()),
            HeaderField::new('M', self.meter.as_str()),
            HeaderField::new('K', mode::to_abc_key(&self.mode)),
        ];

        if let Some(username) = self.username() {
            fields.push(HeaderField::new('Z', username));
        }

        if let Some(date) = self.date() {
            fields.push(HeaderField::new('H', format!("Added {date}")));
        }

        fields
    }

    /// Serialize the tune as an ABC block to an arbitrary I/O writer
    ///
    /// The body is written verbatim and terminated by a single newline. No blank separator line
    /// is written after it.
    pub fn to_writer<W>(&self, mut writer: W) -> Result<(), io::Error>
    where
        W: Write,
    {
        write!(writer, "{self}")
    }

    /// Render the tune as an ABC block
    pub fn to_abc(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tune {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for field in self.header() {
            writeln!(f, "{field}")?;
        }
        writeln!(f, "{}", self.abc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kesh() -> Tune {
        Tune::new(
            "2",
            "The Kesh",
            "jig",
            "6/8",
            "Gmajor",
            "|:GAG GAB|ABA ABd:|\nedd gdd|edB dBA:|",
        )
    }

    #[test]
    fn header_order() {
        let tune = kesh().with_username("Jeremy").with_date("2001-01-01");
        let tags: String = tune.header().iter().map(|field| field.tag).collect();
        assert_eq!(tags, "XTRMKZH");
    }

    #[test]
    fn render() {
        assert_eq!(
            kesh().to_abc(),
            "X:2\nT:The Kesh\nR:jig\nM:6/8\nK:g\n|:GAG GAB|ABA ABd:|\nedd gdd|edB dBA:|\n"
        );
    }

    #[test]
    fn render_optional_fields() {
        let tune = kesh()
            .with_username("Jeremy")
            .with_date("2001-01-01 00:00:00");

        assert_eq!(
            tune.to_abc(),
            "X:2\nT:The Kesh\nR:jig\nM:6/8\nK:g\nZ:Jeremy\nH:Added 2001-01-01 00:00:00\n|:GAG GAB|ABA ABd:|\nedd gdd|edB dBA:|\n"
        );
    }

    #[test]
    fn render_empty_fields() {
        let tune = Tune::new("", "", "", "", "", "");
        assert_eq!(tune.to_abc(), "X:\nT:\nR:\nM:\nK:\n\n");
    }

    #[test]
    fn writer_and_string_agree() {
        let tune = Tune::new("3", "Port na bPúcaí", "air", "3/4", "Edorian", "É2 F|G3")
            .with_username("Seán");

        let mut bytes = Vec::new();
        tune.to_writer(&mut bytes).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), tune.to_abc());
        assert!(tune.to_abc().contains("T:Port na bPúcaí\n"));
        assert_eq!(tune.to_string(), tune.to_abc());
    }

    #[test]
    fn field_display() {
        assert_eq!(HeaderField::new('K', "d mix").to_string(), "K:d mix");
    }
}
