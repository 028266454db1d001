use crate::model::*;
use crate::util::misc::*;

use crate::error_exit;

// 座席色の参照モード
#[derive(Debug)]
pub struct ColorApp {
    args: Vec<String>,
    rgb: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Query {
    Index(Index),
    Seat(Seat, Seat),
}

impl ColorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args, rgb: false }
    }

    pub fn run(&mut self) {
        let q = match self.parse_query() {
            Ok(Some(q)) => q,
            Ok(None) => {
                print_usage();
                return;
            }
            Err(e) => error_exit!("{}", e),
        };

        match self.process_query(&q) {
            Ok(s) => println!("{}", s),
            Err(e) => error_exit!("{}", e),
        }
    }

    fn parse_query(&mut self) -> Res<Option<Query>> {
        let mut index = None;
        let mut seat_self = None;
        let mut seat_target = None;
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-i" => index = Some(parse_next(&mut it, s)?),
                "-s" => seat_self = Some(parse_next(&mut it, s)?),
                "-t" => seat_target = Some(parse_next(&mut it, s)?),
                "-rgb" => self.rgb = true,
                opt => Err(format!("unknown option: {}", opt))?,
            }
        }

        Ok(match (index, seat_self, seat_target) {
            (Some(i), None, None) => Some(Query::Index(i)),
            (None, Some(s), Some(t)) => Some(Query::Seat(s, t)),
            (None, None, None) => None,
            _ => Err("specify either -i or both -s and -t")?,
        })
    }

    fn process_query(&self, q: &Query) -> Res<String> {
        let c = match *q {
            Query::Index(i) => seat_color(i),
            Query::Seat(s, t) => Some(color_for_seat(s, t)),
        };
        let Some(c) = c else {
            return Ok("undefined".to_string());
        };
        if self.rgb {
            let Rgb(r, g, b) = Rgb::from_hex(c)?;
            Ok(format!("{} ({}, {}, {})", c, r, g, b))
        } else {
            Ok(c.to_string())
        }
    }
}

fn print_usage() {
    println!("usage: C -i <index> | C -s <seat_self> -t <seat_target>");
    for role in ColorRole::ALL {
        println!("  {}: {} {:?}", role.index(), role.color(), role);
    }
}

#[test]
fn test_color_app() {
    let to_args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let mut app = ColorApp::new(to_args(&["-i", "4"]));
    let q = app.parse_query().unwrap().unwrap();
    assert_eq!(q, Query::Index(4));
    assert_eq!(app.process_query(&q).unwrap(), "#888888");
    assert_eq!(app.process_query(&Query::Index(6)).unwrap(), "undefined");

    let mut app = ColorApp::new(to_args(&["-s", "2", "-t", "0", "-rgb"]));
    let q = app.parse_query().unwrap().unwrap();
    assert_eq!(app.process_query(&q).unwrap(), "#00FF00 (0, 255, 0)");

    let mut app = ColorApp::new(to_args(&["-s", "2"]));
    assert!(app.parse_query().is_err());

    let mut app = ColorApp::new(vec![]);
    assert_eq!(app.parse_query().unwrap(), None);
}
