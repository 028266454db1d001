use crate::model::*;
use crate::util::misc::*;

use crate::{debug, error_exit};

// 相対座席の計算モード
#[derive(Debug)]
pub struct SeatApp {
    args: Vec<String>,
}

impl SeatApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn run(&mut self) {
        match self.parse_seats() {
            Ok((s, t)) => println!("{}", describe(s, t)),
            Err(e) => {
                println!("usage: P -s <seat_self> -t <seat_target>");
                error_exit!("{}", e);
            }
        }
    }

    fn parse_seats(&self) -> Res<(i64, i64)> {
        let mut seat_self = None;
        let mut seat_target = None;
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => seat_self = Some(parse_next(&mut it, s)?),
                "-t" => seat_target = Some(parse_next(&mut it, s)?),
                opt => Err(format!("unknown option: {}", opt))?,
            }
        }
        let s = seat_self.ok_or("seat_self(-s) not specified")?;
        let t = seat_target.ok_or("seat_target(-t) not specified")?;
        Ok((s, t))
    }
}

fn describe(seat_self: i64, seat_target: i64) -> String {
    let pos = seat_pos_i64(seat_self, seat_target);
    let in_range = |s: i64| (0..SEAT as i64).contains(&s);
    if in_range(seat_self) && in_range(seat_target) {
        let rel = RelativeSeat::of(seat_self as Seat, seat_target as Seat);
        format!("{} ({})", pos, rel)
    } else {
        debug!("out of range seat: self={} target={}", seat_self, seat_target);
        format!("{}", pos)
    }
}

#[test]
fn test_seat_app() {
    let args = ["-s", "3", "-t", "1"].iter().map(|s| s.to_string()).collect();
    let app = SeatApp::new(args);
    let (s, t) = app.parse_seats().unwrap();
    assert_eq!(describe(s, t), "2 (toimen)");
    assert_eq!(describe(0, 3), "3 (kamicha)");
    assert_eq!(describe(5, -2), "1");

    let app = SeatApp::new(vec!["-s".to_string(), "0".to_string()]);
    assert_eq!(
        app.parse_seats().unwrap_err().to_string(),
        "seat_target(-t) not specified"
    );
}
