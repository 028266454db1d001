use super::*;
use crate::util::misc::Res;

pub const SEAT_COLORS: [&str; COLOR] = [
    "#FF8C00", // 0: 自家
    "#FF0000", // 1: 下家
    "#00FF00", // 2: 対家
    "#2222FF", // 3: 上家
    "#888888", // 4: ドラ "D"
    "#000000", // 5: 山・手牌 "R"
];

#[inline]
pub fn seat_color(index: Index) -> Option<&'static str> {
    SEAT_COLORS.get(index).copied()
}

// seat_selfから見たseat_targetの表示色
#[inline]
pub fn color_for_seat(seat_self: Seat, seat_target: Seat) -> &'static str {
    SEAT_COLORS[seat_pos(seat_self, seat_target)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    SelfSeat,
    Shimocha,
    Toimen,
    Kamicha,
    Dora,
    Wall,
}

impl ColorRole {
    pub const ALL: [ColorRole; COLOR] = [
        ColorRole::SelfSeat,
        ColorRole::Shimocha,
        ColorRole::Toimen,
        ColorRole::Kamicha,
        ColorRole::Dora,
        ColorRole::Wall,
    ];

    #[inline]
    pub fn index(self) -> Index {
        self as Index
    }

    #[inline]
    pub fn from_index(index: Index) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn color(self) -> &'static str {
        SEAT_COLORS[self.index()]
    }

    // 座席以外のマーカーに付ける記号
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            ColorRole::Dora => Some("D"),
            ColorRole::Wall => Some("R"),
            _ => None,
        }
    }

    pub fn relative_seat(self) -> Option<RelativeSeat> {
        RelativeSeat::ALL.get(self.index()).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_hex(s: &str) -> Res<Self> {
        let hex = match s.strip_prefix('#') {
            Some(h) if h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()) => h,
            _ => Err(format!("invalid color code: '{}'", s))?,
        };
        let c = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Self(c(0)?, c(2)?, c(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[test]
fn test_seat_colors() {
    assert_eq!(SEAT_COLORS.len(), 6);
    for c in SEAT_COLORS {
        let rgb = Rgb::from_hex(c).unwrap();
        assert_eq!(rgb.to_hex(), c);
    }
    assert_eq!(Rgb::from_hex(SEAT_COLORS[3]).unwrap(), Rgb(0x22, 0x22, 0xFF));
}

#[test]
fn test_seat_color() {
    assert_eq!(seat_color(0), Some("#FF8C00"));
    assert_eq!(seat_color(5), Some("#000000"));
    assert_eq!(seat_color(6), None);
    assert_eq!(ColorRole::Dora.color(), "#888888");
    assert_eq!(ColorRole::Dora.symbol(), Some("D"));
    assert_eq!(ColorRole::Wall.symbol(), Some("R"));
    assert_eq!(ColorRole::Toimen.symbol(), None);
    assert_eq!(ColorRole::from_index(6), None);
    for (i, role) in ColorRole::ALL.iter().enumerate() {
        assert_eq!(ColorRole::from_index(i), Some(*role));
        assert_eq!(seat_color(i), Some(role.color()));
    }
    assert_eq!(ColorRole::Dora.relative_seat(), None);
    assert_eq!(ColorRole::Kamicha.relative_seat(), Some(RelativeSeat::Kamicha));
}

#[test]
fn test_color_for_seat() {
    // 自家は常にオレンジ
    for s in 0..SEAT {
        assert_eq!(color_for_seat(s, s), "#FF8C00");
    }
    assert_eq!(color_for_seat(0, 1), "#FF0000");
    assert_eq!(color_for_seat(3, 1), "#00FF00");
    assert_eq!(color_for_seat(1, 0), "#2222FF");
}

#[test]
fn test_invalid_hex() {
    for s in ["FF8C00", "#FF8C0", "#GG0000", "#FF8C000", ""] {
        assert!(Rgb::from_hex(s).is_err(), "{}", s);
    }
}
