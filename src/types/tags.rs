/// Normalized tag record, the exchange value between the readers and the
/// writer. An absent field means "unknown" - the readers never store empty
/// strings or zero numbers.
#[derive(PartialEq, Debug, Default, Clone)]
pub struct Tags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub comment: Option<String>,

    // tagging time, ISO 8601
    pub timestamp: Option<String>,

    pub track: Option<u32>,
    pub disc: Option<u32>,
    pub year: Option<u32>,

    /// Raw cover image bytes, exclusively owned by the record.
    pub cover: Option<Vec<u8>>,
}

// take every field the overlay actually has, keep the rest
macro_rules! overlay {
    ($base:ident, $over:ident, $($field:ident),+) => {
        $(
            if $over.$field.is_some() {
                $base.$field = $over.$field;
            }
        )+
    };
}

impl Tags {
    pub fn none() -> Tags {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Tags::none()
    }

    /// Overlay `over` on top of this record; fields present in `over` win.
    pub fn merge(&mut self, over: Tags) {
        overlay!(
            self, over, title, artist, album, genre, comment, timestamp, track, disc, year, cover
        );
    }
}

pub(crate) fn put_text(slot: &mut Option<String>, value: String) {
    if !value.is_empty() {
        *slot = Some(value);
    }
}

pub(crate) fn put_num(slot: &mut Option<u32>, value: u32) {
    if value > 0 {
        *slot = Some(value);
    }
}
