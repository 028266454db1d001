use super::*;
use crate::util::misc::Res;

// seat_selfから見たseat_targetの相対位置
// 0: 自家, 1: 下家, 2: 対家, 3: 上家
#[inline]
pub fn seat_pos(seat_self: Seat, seat_target: Seat) -> Seat {
    (seat_target % SEAT + SEAT - seat_self % SEAT) % SEAT
}

// 負の値を含む座席番号用. 剰余は床関数側に揃えるので結果は常に0~3
#[inline]
pub fn seat_pos_i64(seat_self: i64, seat_target: i64) -> i64 {
    let n = SEAT as i64;
    (n + seat_target.rem_euclid(n) - seat_self.rem_euclid(n)).rem_euclid(n)
}

#[inline]
pub fn calc_prevalent_wind(round: usize) -> Tnum {
    round % SEAT + 1 // WE | WS | WW | WN
}

#[inline]
pub fn calc_seat_wind(dealer: Seat, seat: Seat) -> Tnum {
    seat_pos(dealer, seat) + 1 // WE | WS | WW | WN
}

pub fn wind_from_char(ch: char) -> Res<Tnum> {
    Ok(match ch {
        'E' => WE,
        'S' => WS,
        'W' => WW,
        'N' => WN,
        _ => Err(format!("invalid wind char: {}", ch))?,
    })
}

pub fn wind_to_char(ni: Tnum) -> Option<char> {
    match ni {
        WE => Some('E'),
        WS => Some('S'),
        WW => Some('W'),
        WN => Some('N'),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeSeat {
    Jicha,    // 自家
    Shimocha, // 下家
    Toimen,   // 対家
    Kamicha,  // 上家
}

impl RelativeSeat {
    pub const ALL: [RelativeSeat; SEAT] = [
        RelativeSeat::Jicha,
        RelativeSeat::Shimocha,
        RelativeSeat::Toimen,
        RelativeSeat::Kamicha,
    ];

    pub fn of(seat_self: Seat, seat_target: Seat) -> Self {
        Self::ALL[seat_pos(seat_self, seat_target)]
    }

    #[inline]
    pub fn index(self) -> Seat {
        self as Seat
    }

    // 座席色テーブルの先頭4つは相対座席の順に並んでいる
    #[inline]
    pub fn color_role(self) -> ColorRole {
        ColorRole::ALL[self.index()]
    }

    // 相対座席から絶対座席に戻す
    #[inline]
    pub fn target_from(self, seat_self: Seat) -> Seat {
        (seat_self % SEAT + self.index()) % SEAT
    }
}

impl fmt::Display for RelativeSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelativeSeat::Jicha => "jicha",
            RelativeSeat::Shimocha => "shimocha",
            RelativeSeat::Toimen => "toimen",
            RelativeSeat::Kamicha => "kamicha",
        };
        write!(f, "{}", s)
    }
}

#[test]
fn test_seat_pos() {
    assert_eq!(seat_pos(0, 0), 0);
    assert_eq!(seat_pos(0, 1), 1);
    assert_eq!(seat_pos(0, 3), 3);
    assert_eq!(seat_pos(2, 0), 2);
    assert_eq!(seat_pos(3, 1), 2);
}

#[test]
fn test_seat_pos_all() {
    for s in 0..SEAT {
        assert_eq!(seat_pos(s, s), 0);
        let mut seen = [false; SEAT];
        for t in 0..SEAT {
            let p = seat_pos(s, t);
            assert!(p < SEAT);
            assert!(!seen[p], "duplicated position: self={} target={}", s, t);
            seen[p] = true;
            assert_eq!(seat_pos_i64(s as i64, t as i64), p as i64);
            assert_eq!(RelativeSeat::of(s, t).target_from(s), t);
        }
    }
}

#[test]
fn test_seat_pos_out_of_range() {
    use rand::Rng;

    // seat_selfが大きくてもアンダーフローしない
    assert_eq!(seat_pos(7, 1), 2);
    assert_eq!(seat_pos_i64(0, -1), 3);
    assert_eq!(seat_pos_i64(-1, 0), 1);
    assert_eq!(seat_pos_i64(i64::MIN, i64::MAX), 3);

    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let s: i64 = rng.gen_range(-1000..1000);
        let t: i64 = rng.gen_range(-1000..1000);
        let p = seat_pos_i64(s, t);
        assert!((0..4).contains(&p));
        assert_eq!(p, seat_pos_i64(s + 4, t));
        assert_eq!(p, seat_pos_i64(s, t - 8));
        assert_eq!((s + p - t).rem_euclid(4), 0);
    }
}

#[test]
fn test_wind() {
    assert_eq!(calc_prevalent_wind(0), WE);
    assert_eq!(calc_prevalent_wind(5), WS);
    assert_eq!(calc_seat_wind(0, 0), WE);
    assert_eq!(calc_seat_wind(1, 0), WN);
    assert_eq!(calc_seat_wind(2, 3), WS);
    for ch in ['E', 'S', 'W', 'N'] {
        assert_eq!(wind_to_char(wind_from_char(ch).unwrap()), Some(ch));
    }
    assert!(wind_from_char('X').is_err());
    assert_eq!(wind_to_char(0), None);
}

#[test]
fn test_relative_seat() {
    assert_eq!(RelativeSeat::of(3, 1), RelativeSeat::Toimen);
    assert_eq!(RelativeSeat::of(1, 0), RelativeSeat::Kamicha);
    assert_eq!(RelativeSeat::Shimocha.color_role(), ColorRole::Shimocha);
    assert_eq!(RelativeSeat::Kamicha.to_string(), "kamicha");
}

#[test]
fn test_relative_seat_large_seat() {
    // 座席番号が大きくてもオーバーフローしない
    let s = usize::MAX;
    assert_eq!(RelativeSeat::Kamicha.target_from(s), 2);
    assert_eq!(RelativeSeat::Jicha.target_from(s), s % SEAT);
    for rel in RelativeSeat::ALL {
        let t = rel.target_from(s);
        assert_eq!(RelativeSeat::of(s, t), rel);
    }
}
