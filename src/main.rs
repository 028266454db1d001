#![warn(rust_2018_idioms)]

use mahjong_common::app;
use mahjong_common::error;
use mahjong_common::util::log::{set_log_level, LEVEL_DEBUG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    TileType, // T: 牌種別テーブル参照モード
    Color,    // C: 座席色参照モード
    Seat,     // P: 相対座席計算モード
    Export,   // J: GUI用定数テーブル出力モード
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s {
        "T" => Some(Mode::TileType),
        "C" => Some(Mode::Color),
        "P" => Some(Mode::Seat),
        "J" => Some(Mode::Export),
        _ => None,
    }
}

// -d はどのモードでも共通なので取り除いてフラグとして返却
fn split_debug_flag(args: &[String]) -> (Vec<String>, bool) {
    let mut rest = vec![];
    let mut debug = false;
    for a in args {
        if a == "-d" {
            debug = true;
        } else {
            rest.push(a.clone());
        }
    }
    (rest, debug)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        print_usage();
        std::process::exit(1);
    }

    let Some(mode) = parse_mode(&args[1]) else {
        error!("unknown mode: {}", args[1]);
        print_usage();
        std::process::exit(1);
    };

    let (args2, debug) = split_debug_flag(&args[2..]);
    if debug {
        set_log_level(LEVEL_DEBUG);
    }

    match mode {
        Mode::TileType => app::TileTypeApp::new(args2).run(),
        Mode::Color => app::ColorApp::new(args2).run(),
        Mode::Seat => app::SeatApp::new(args2).run(),
        Mode::Export => app::ExportApp::new(args2).run(),
    }
}

fn print_usage() {
    println!("usage: mahjong_common <T|C|P|J> [options] [-d]");
}

#[test]
fn test_parse_mode() {
    assert_eq!(parse_mode("T"), Some(Mode::TileType));
    assert_eq!(parse_mode("C"), Some(Mode::Color));
    assert_eq!(parse_mode("P"), Some(Mode::Seat));
    assert_eq!(parse_mode("J"), Some(Mode::Export));
    assert_eq!(parse_mode("t"), None);
    assert_eq!(parse_mode("X"), None);
    assert_eq!(parse_mode(""), None);
}

#[test]
fn test_split_debug_flag() {
    let to_args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let (rest, debug) = split_debug_flag(&to_args(&["-s", "3", "-d", "-t", "1"]));
    assert!(debug);
    assert_eq!(rest, to_args(&["-s", "3", "-t", "1"]));

    let (rest, debug) = split_debug_flag(&to_args(&["-k", "p"]));
    assert!(!debug);
    assert_eq!(rest, to_args(&["-k", "p"]));

    let (rest, debug) = split_debug_flag(&[]);
    assert!(!debug);
    assert!(rest.is_empty());
}
