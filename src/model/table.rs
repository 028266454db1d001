use serde_json::{json, Map, Value};

use super::*;
use crate::util::misc::Res;

// フロントエンドの tile_types と同じ形のオブジェクト
// {"0": "m", ..., "m": 0, ...}
pub fn tile_types_json() -> Value {
    let mut m = Map::new();
    for tt in TileType::ALL {
        m.insert(tt.index().to_string(), json!(tt.to_string()));
    }
    for tt in TileType::ALL {
        m.insert(tt.to_string(), json!(tt.index()));
    }
    Value::Object(m)
}

// GUIと共有する定数テーブル
#[derive(Debug, Clone, Serialize)]
pub struct CommonTable {
    pub tile_types: Value,
    pub seat_colors: Vec<&'static str>,
}

impl CommonTable {
    pub fn new() -> Self {
        Self {
            tile_types: tile_types_json(),
            seat_colors: SEAT_COLORS.to_vec(),
        }
    }

    pub fn to_json(&self) -> Res<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Res<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CommonTable {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_tile_types_json() {
    let v = tile_types_json();
    let expected = json!({
        "0": "m", "1": "p", "2": "s", "3": "z",
        "m": 0, "p": 1, "s": 2, "z": 3
    });
    assert_eq!(v, expected);
    assert_eq!(v.as_object().unwrap().len(), 8);

    // 双方向に引いて元に戻る
    for key in ["0", "1", "2", "3"] {
        let ch = v[key].as_str().unwrap();
        assert_eq!(v[ch].as_u64().unwrap().to_string(), key);
    }
}

#[test]
fn test_common_table() {
    let tbl = CommonTable::new();
    let v: Value = serde_json::from_str(&tbl.to_json().unwrap()).unwrap();
    assert_eq!(v["tile_types"]["p"], json!(1));
    assert_eq!(v["seat_colors"].as_array().unwrap().len(), 6);
    assert_eq!(v["seat_colors"][4], json!("#888888"));

    let v2: Value = serde_json::from_str(&tbl.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v, v2);
}
