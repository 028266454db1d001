// 型エイリアス
pub type Seat = usize; // 座席
pub type Type = usize; // 牌の種別部分 (萬子,筒子,索子,字牌)
pub type Tnum = usize; // 牌の数字部分
pub type Index = usize; // その他Index

// Number
pub const SEAT: usize = 4; // 座席の数
pub const TYPE: usize = 4; // 牌の種別部分の数 (萬子,筒子,索子,字牌)
pub const COLOR: usize = 6; // 座席色の数

// Type Index
pub const TM: Type = 0; // Type: Manzu (萬子)
pub const TP: Type = 1; // Type: Pinzu (筒子)
pub const TS: Type = 2; // Type: Souzu (索子)
pub const TZ: Type = 3; // Type: Zihai (字牌)

// Tnum Index
pub const WE: Tnum = 1; // Wind: East  (東)
pub const WS: Tnum = 2; // Wind: South (南)
pub const WW: Tnum = 3; // Wind: West  (西)
pub const WN: Tnum = 4; // Wind: North (北)
