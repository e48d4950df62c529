use std::fmt;

/// RTPCodecType determines the type of a codec
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTPCodecType {
    #[default]
    Unspecified = 0,

    /// RTPCodecTypeAudio indicates this is an audio codec
    Audio = 1,

    /// RTPCodecTypeVideo indicates this is a video codec
    Video = 2,
}

impl From<&str> for RTPCodecType {
    fn from(raw: &str) -> Self {
        match raw {
            "audio" => RTPCodecType::Audio,
            "video" => RTPCodecType::Video,
            _ => RTPCodecType::Unspecified,
        }
    }
}

impl From<u8> for RTPCodecType {
    fn from(v: u8) -> Self {
        match v {
            1 => RTPCodecType::Audio,
            2 => RTPCodecType::Video,
            _ => RTPCodecType::Unspecified,
        }
    }
}

impl fmt::Display for RTPCodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTPCodecType::Audio => "audio",
            RTPCodecType::Video => "video",
            RTPCodecType::Unspecified => crate::UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rtp_codec_type_string() {
        let tests = vec![
            (RTPCodecType::Unspecified, "Unspecified"),
            (RTPCodecType::Audio, "audio"),
            (RTPCodecType::Video, "video"),
        ];

        for (kind, expected_string) in tests {
            assert_eq!(kind.to_string(), expected_string);
            if kind != RTPCodecType::Unspecified {
                assert_eq!(RTPCodecType::from(expected_string), kind);
            }
        }
    }

    #[test]
    fn test_rtp_codec_type_from_u8() {
        assert_eq!(RTPCodecType::from(1u8), RTPCodecType::Audio);
        assert_eq!(RTPCodecType::from(2u8), RTPCodecType::Video);
        assert_eq!(RTPCodecType::from(9u8), RTPCodecType::Unspecified);
    }
}
