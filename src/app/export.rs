use crate::model::*;
use crate::util::misc::*;

use crate::{error_exit, info};

// GUI用に定数テーブルをJSONで出力するモード
#[derive(Debug)]
pub struct ExportApp {
    args: Vec<String>,
    pretty: bool,
    file_path: String,
}

impl ExportApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            pretty: false,
            file_path: String::new(),
        }
    }

    pub fn run(&mut self) {
        if let Err(e) = self.parse_args().and_then(|_| self.export()) {
            error_exit!("{}", e);
        }
    }

    fn parse_args(&mut self) -> Res {
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-p" => self.pretty = true,
                "-o" => self.file_path = parse_next(&mut it, s)?,
                opt => Err(format!("unknown option: {}", opt))?,
            }
        }
        Ok(())
    }

    fn render(&self) -> Res<String> {
        let tbl = CommonTable::new();
        if self.pretty {
            tbl.to_json_pretty()
        } else {
            tbl.to_json()
        }
    }

    fn export(&self) -> Res {
        let data = self.render()?;
        if self.file_path.is_empty() {
            println!("{}", data);
        } else {
            write_to_file(&self.file_path, &data)?;
            info!("exported: {}", self.file_path);
        }
        Ok(())
    }
}

#[test]
fn test_export_app() {
    let path = std::env::temp_dir().join("mahjong_common_export").join("common.json");
    let path = path.to_str().unwrap().to_string();
    let mut app = ExportApp::new(vec!["-p".to_string(), "-o".to_string(), path.clone()]);
    app.parse_args().unwrap();
    assert!(app.pretty);
    app.export().unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(v["tile_types"]["3"], serde_json::json!("z"));
    std::fs::remove_file(&path).ok();

    let mut app = ExportApp::new(vec!["-x".to_string()]);
    assert!(app.parse_args().is_err());
}
