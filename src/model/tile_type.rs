use serde::{de, ser};

use super::*;
use crate::util::misc::Res;

// 種別Indexの順に並べた種別文字
pub const TILE_TYPE_CHARS: [char; TYPE] = ['m', 'p', 's', 'z'];

// 牌の種別 (m=0, p=1, s=2, z=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileType {
    M, // 萬子
    P, // 筒子
    S, // 索子
    Z, // 字牌
}

impl TileType {
    pub const ALL: [TileType; TYPE] = [TileType::M, TileType::P, TileType::S, TileType::Z];

    #[inline]
    pub fn index(self) -> Type {
        match self {
            TileType::M => TM,
            TileType::P => TP,
            TileType::S => TS,
            TileType::Z => TZ,
        }
    }

    #[inline]
    pub fn from_index(ti: Type) -> Option<Self> {
        Self::ALL.get(ti).copied()
    }

    #[inline]
    pub fn to_char(self) -> char {
        TILE_TYPE_CHARS[self.index()]
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'm' => Some(TileType::M),
            'p' => Some(TileType::P),
            's' => Some(TileType::S),
            'z' => Some(TileType::Z),
            _ => None,
        }
    }

    // 1文字の文字列のみ受け付ける
    pub fn from_symbol(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        }
    }

    // 数牌
    #[inline]
    pub fn is_suit(self) -> bool {
        self != TileType::Z
    }

    // 字牌
    #[inline]
    pub fn is_hornor(self) -> bool {
        self == TileType::Z
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl ser::Serialize for TileType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileTypeVisitor;

impl<'de> de::Visitor<'de> for TileTypeVisitor {
    type Value = TileType;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile type symbol (m, p, s or z)")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        TileType::from_symbol(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> de::Deserialize<'de> for TileType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileTypeVisitor)
    }
}

pub fn tile_type_from_char(ch: char) -> Res<TileType> {
    match TileType::from_char(ch) {
        Some(tt) => Ok(tt),
        None => Err(format!("invalid tile type char: {ch}"))?,
    }
}

pub fn tile_type_from_index(ti: Type) -> Res<TileType> {
    match TileType::from_index(ti) {
        Some(tt) => Ok(tt),
        None => Err(format!("invalid tile type index: {ti}"))?,
    }
}

// フロントエンドの種別テーブルと同じ引き方をする
// "0"~"3" は種別文字に, "m","p","s","z" はIndexに変換. それ以外はNone
pub fn resolve(key: &str) -> Option<String> {
    if let Some(tt) = TileType::from_symbol(key) {
        return Some(tt.index().to_string());
    }
    // "+1" や "01" のような表記は受け付けない
    if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) {
        let ti: Type = key.parse().ok()?;
        return TileType::from_index(ti).map(|tt| tt.to_string());
    }
    None
}

#[test]
fn test_index_round_trip() {
    for ti in 0..TYPE {
        let tt = TileType::from_index(ti).unwrap();
        assert_eq!(TileType::from_char(tt.to_char()).unwrap().index(), ti);
    }
    for ch in TILE_TYPE_CHARS {
        let tt = TileType::from_char(ch).unwrap();
        assert_eq!(TileType::from_index(tt.index()).unwrap().to_char(), ch);
    }
}

#[test]
fn test_pinzu() {
    assert_eq!(TileType::from_symbol("p").map(TileType::index), Some(1));
    assert_eq!(TileType::from_index(1).map(|tt| tt.to_string()), Some("p".to_string()));
    assert_eq!(resolve("p"), Some("1".to_string()));
    assert_eq!(resolve("1"), Some("p".to_string()));
}

#[test]
fn test_invalid_key() {
    assert_eq!(TileType::from_index(4), None);
    assert_eq!(TileType::from_char('x'), None);
    assert_eq!(TileType::from_char('M'), None);
    assert_eq!(TileType::from_symbol(""), None);
    assert_eq!(TileType::from_symbol("mp"), None);
    assert_eq!(resolve("4"), None);
    assert_eq!(resolve("01"), None);
    assert_eq!(resolve("q"), None);

    assert!(tile_type_from_char('x').is_err());
    assert_eq!(
        tile_type_from_index(7).unwrap_err().to_string(),
        "invalid tile type index: 7"
    );
    assert_eq!(tile_type_from_char('z').unwrap(), TileType::Z);
}

#[test]
fn test_honor() {
    assert!(TileType::Z.is_hornor());
    assert!(!TileType::Z.is_suit());
    assert!(TileType::ALL[..3].iter().all(|tt| tt.is_suit()));
}

#[test]
fn test_serde() {
    let v = serde_json::to_string(&TileType::ALL).unwrap();
    assert_eq!(v, r#"["m","p","s","z"]"#);
    let tts: Vec<TileType> = serde_json::from_str(&v).unwrap();
    assert_eq!(tts, TileType::ALL.to_vec());
    assert!(serde_json::from_str::<TileType>(r#""x""#).is_err());
}
