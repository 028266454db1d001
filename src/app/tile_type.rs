use crate::model::*;
use crate::util::misc::*;

use crate::{debug, error_exit};

// 種別テーブルの参照モード
#[derive(Debug)]
pub struct TileTypeApp {
    args: Vec<String>,
}

impl TileTypeApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn run(&mut self) {
        match self.parse_keys() {
            Ok(keys) if keys.is_empty() => print_usage(),
            Ok(keys) => {
                for k in &keys {
                    println!("{}", lookup_line(k));
                }
            }
            Err(e) => error_exit!("{}", e),
        }
    }

    fn parse_keys(&self) -> Res<Vec<String>> {
        let mut keys = vec![];
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-k" => keys.push(parse_next(&mut it, s)?),
                opt if opt.starts_with('-') && opt.len() > 1 => {
                    return Err(format!("unknown option: {}", opt).into());
                }
                _ => keys.push(s.clone()),
            }
        }
        Ok(keys)
    }
}

fn lookup_line(key: &str) -> String {
    let v = resolve(key);
    debug!("resolve({:?}) = {:?}", key, v);
    format!("{}: {}", key, v.as_deref().unwrap_or("undefined"))
}

fn print_usage() {
    println!("usage: T [-k] <key>...");
    println!("  key: 0, 1, 2, 3, m, p, s, z");
}

#[test]
fn test_tile_type_app() {
    let args = ["-k", "p", "1", "x"].iter().map(|s| s.to_string()).collect();
    let app = TileTypeApp::new(args);
    let keys = app.parse_keys().unwrap();
    let lines: Vec<String> = keys.iter().map(|k| lookup_line(k)).collect();
    assert_eq!(lines, vec!["p: 1", "1: p", "x: undefined"]);

    let app = TileTypeApp::new(vec!["-q".to_string()]);
    assert!(app.parse_keys().is_err());
}
