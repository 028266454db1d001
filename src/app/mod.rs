// mainから直接呼び出すアプリケーションの動作モード(T, C, P, J)のモジュール

mod color;
mod export;
mod seat;
mod tile_type;

pub use color::ColorApp;
pub use export::ExportApp;
pub use seat::SeatApp;
pub use tile_type::TileTypeApp;
