use crate::tools::encoding::decode_iso_8859_1;
use crate::types::put_num;
use crate::types::put_text;
use crate::Tags;

/// Size of the classic trailer.
pub const TAG_LEN: usize = 128;
/// Size of the "TAG+" extension block that precedes the classic trailer.
pub const EXT_LEN: usize = 227;

// The venerable ID3v1 genres. Everything past "Rock/Pop" is reserved and
// resolves to the "Unknown" sentinel.
const GENRES: [&str; 149] = [
    "Blues", "ClassicRock", "Country", "Dance", "Disco", "Funk", "Grunge",
    "Hip-Hop", "Jazz", "Metal", "NewAge", "Oldies", "Other", "Pop", "R&B",
    "Rap", "Reggae", "Rock", "Techno", "Industrial", "Alternative", "Ska",
    "DeathMetal", "Pranks", "Soundtrack", "Euro-Techno", "Ambient",
    "Trip-Hop", "Vocal", "Jazz+Funk", "Fusion", "Trance", "Classical",
    "Instrumental", "Acid", "House", "Game", "SoundClip", "Gospel", "Noise",
    "AlternativeRock", "Bass", "Soul", "Punk", "Space", "Meditative",
    "InstrumentalPop", "InstrumentalRock", "Ethnic", "Gothic", "Darkwave",
    "Techno-Industrial", "Electronic", "Pop-Folk", "Eurodance", "Dream",
    "SouthernRock", "Comedy", "Cult", "GangstaRap", "Top40", "ChristianRap",
    "Pop/Funk", "Jungle", "NativeAmerican", "Cabaret", "NewWave",
    "Psychadelic", "Rave", "Showtunes", "Trailer", "Lo-Fi", "Tribal",
    "AcidPunk", "AcidJazz", "Polka", "Retro", "Musical", "Rock&Roll",
    "HardRock", "Folk", "Folk-Rock", "NationalFolk", "Swing", "FastFusion",
    "Bebob", "Latin", "Revival", "Celtic", "Bluegrass", "Avantgarde",
    "GothicRock", "ProgressiveRock", "PsychedelicRock", "SymphonicRock",
    "SlowRock", "BigBand", "Chorus", "EasyListening", "Acoustic", "Humor",
    "Speech", "Chanson", "Opera", "ChamberMusic", "Sonata", "Symphony",
    "BootyBass", "Primus", "PornGroove", "Satire", "SlowJam", "Club",
    "Tango", "Samba", "Folklore", "Ballad", "PowerBallad", "RhythmicSoul",
    "Freestyle", "Duet", "PunkRock", "DrumSolo", "Acapella", "Euro-House",
    "DanceHall", "Goa", "Drum&Bass", "Club-House", "Hardcore", "Terror",
    "Indie", "BritPop", "Negerpunk", "PolskPunk", "Beat",
    "ChristianGangstaRap", "HeavyMetal", "BlackMetal", "Crossover",
    "ContemporaryChristian", "ChristianRock", "Merengue", "Salsa",
    "ThrashMetal", "Anime", "J-Pop", "Synthpop", "Rock/Pop",
];

/// Resolve a one-byte genre index against the historical lookup table.
pub fn genre_name(index: u8) -> &'static str {
    GENRES.get(index as usize).copied().unwrap_or("Unknown")
}

// fixed-width ID3v1 fields are padded with spaces or NULs on the right
fn field(raw: &[u8]) -> String {
    decode_iso_8859_1(raw)
        .trim_end_matches(|c| c == ' ' || c == '\0')
        .to_string()
}

/// Read a trailing ID3v1 tag, including the "TAG+" extension when present.
/// Returns an empty record when the trailer is absent.
pub fn read(data: &[u8]) -> Tags {
    let mut t = Tags::none();
    let n = data.len();

    if n < TAG_LEN || &data[n - 128..n - 125] != b"TAG" {
        return t;
    }

    // the extension block sits directly before the classic trailer and adds
    // 60 characters to each of title/artist/album plus a free-form genre
    let extended = n >= TAG_LEN + EXT_LEN && &data[n - 355..n - 351] == b"TAG+";
    let (title_ext, artist_ext, album_ext, genre_ext) = if extended {
        (
            &data[n - 351..n - 291],
            &data[n - 291..n - 231],
            &data[n - 231..n - 171],
            field(&data[n - 170..n - 140]),
        )
    } else {
        (&[][..], &[][..], &[][..], String::new())
    };

    put_text(
        &mut t.title,
        field(&[&data[n - 125..n - 95], title_ext].concat()),
    );
    put_text(
        &mut t.artist,
        field(&[&data[n - 95..n - 65], artist_ext].concat()),
    );
    put_text(
        &mut t.album,
        field(&[&data[n - 65..n - 35], album_ext].concat()),
    );

    if let Ok(year) = field(&data[n - 35..n - 31]).parse::<u32>() {
        put_num(&mut t.year, year);
    }

    // a zero at [-3] marks the v1.1 layout: 28 byte comment, then the track
    // number; values past 0x7F there cannot be a printable comment character
    // either, so the track byte is just unset
    let (comment_raw, track) = if data[n - 3] == 0 {
        (&data[n - 31..n - 3], data[n - 2])
    } else if data[n - 3] > 0x7F {
        (&data[n - 31..n - 3], 0)
    } else {
        (&data[n - 31..n - 1], 0)
    };
    put_text(&mut t.comment, field(comment_raw));
    put_num(&mut t.track, u32::from(track));

    let genre = if genre_ext.is_empty() {
        genre_name(data[n - 1]).to_string()
    } else {
        genre_ext
    };
    if !genre.eq_ignore_ascii_case("unknown") {
        put_text(&mut t.genre, genre);
    }

    t
}

/// Drop a trailing ID3v1 (and TAG+) block if one is there. No-op otherwise.
pub fn strip(data: &[u8]) -> &[u8] {
    let n = data.len();
    if n >= TAG_LEN && &data[n - 128..n - 125] == b"TAG" {
        if n >= TAG_LEN + EXT_LEN && &data[n - 355..n - 351] == b"TAG+" {
            return &data[..n - 355];
        }
        return &data[..n - 128];
    }
    data
}
