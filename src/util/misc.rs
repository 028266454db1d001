use std::fmt;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

// コマンドライン引数からオプションの値を取り出してパース
pub fn parse_next<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> Res<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it.next().ok_or_else(|| format!("{opt}: value missing"))?;
    n.parse()
        .map_err(|e| format!("{opt}: {e} '{n}'").into())
}

pub fn write_to_file(file_path: &str, data: &str) -> Res {
    use std::io::Write;
    let path = std::path::Path::new(file_path);
    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)?;
    }
    let mut f = std::fs::File::create(path)?;
    write!(f, "{}", data)?;
    Ok(())
}

#[test]
fn test_parse_next() {
    let args: Vec<String> = ["3", "x"].iter().map(|s| s.to_string()).collect();
    let mut it = args.iter();
    assert_eq!(parse_next::<usize>(&mut it, "-s").unwrap(), 3);

    let e = parse_next::<usize>(&mut it, "-t").unwrap_err();
    assert!(e.to_string().starts_with("-t: "));

    let e = parse_next::<usize>(&mut it, "-t").unwrap_err();
    assert_eq!(e.to_string(), "-t: value missing");
}

#[test]
fn test_write_to_file() {
    let dir = std::env::temp_dir().join("mahjong_common_test");
    let path = dir.join("out.txt");
    write_to_file(path.to_str().unwrap(), "abc").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
    std::fs::remove_file(&path).ok();
}
