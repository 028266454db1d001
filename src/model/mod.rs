// 牌種別・座席に関する定数と補助関数
mod define;
mod seat;
mod seat_color;
mod table;
mod tile_type;

use std::fmt;

use serde::Serialize;

pub use define::*;
pub use seat::*;
pub use seat_color::*;
pub use table::*;
pub use tile_type::*;
