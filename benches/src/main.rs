use std::collections::BTreeMap;
use std::env;
use std::fs;

/// результаты одной группы: текст -> вариант -> время, мкс
type Table = BTreeMap<String, BTreeMap<String, u32>>;

/// выведем результаты бенчмарков (вывод criterion) как CSV, по таблице на группу
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Использование: {} <имя файла>", args[0]);
        return;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(e) => {
            println!("Не удалось прочитать файл: {}", e);
            return;
        }
    };

    for (group, table) in parse(&contents) {
        println!("{}:\n{}", group.to_uppercase(), make_csv(&table));
    }
}

/// строки вида "nfc/my/english   time:   [1.2 ms 1.3 ms 1.4 ms]", берём медиану
fn parse(source: &str) -> BTreeMap<String, Table>
{
    let mut groups: BTreeMap<String, Table> = BTreeMap::new();

    for line in source.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" {
            continue;
        }

        let mut name = parts[0].splitn(3, '/');

        let (group, variant, text) = match (name.next(), name.next(), name.next()) {
            (Some(group), Some(variant), Some(text)) => (group, variant, text),
            _ => continue,
        };

        let time = match (parts[4].parse::<f64>(), parts[5]) {
            (Ok(time), "ns") => time / 1000.0,
            (Ok(time), "µs") => time,
            (Ok(time), "ms") => time * 1000.0,
            (Ok(time), "s") => time * 1_000_000.0,
            _ => continue,
        };

        groups
            .entry(group.to_owned())
            .or_default()
            .entry(text.to_owned())
            .or_default()
            .insert(variant.to_owned(), time.trunc() as u32);
    }

    groups
}

fn make_csv(table: &Table) -> String
{
    let mut variants: Vec<&String> = table.values().flat_map(|row| row.keys()).collect();

    variants.sort();
    variants.dedup();

    let mut result = String::new();

    for variant in variants.iter() {
        result.push_str(&format!(";{}", variant));
    }
    result.push('\n');

    for (text, row) in table {
        result.push_str(text);

        for variant in variants.iter() {
            result.push_str(&format!(";{}", row.get(*variant).unwrap_or(&0)));
        }

        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn criterion_output()
    {
        let output = "\
nfc/my/english          time:   [10.120 µs 10.250 µs 10.400 µs]
                        thrpt:  [1.0 GiB/s 1.1 GiB/s 1.2 GiB/s]
nfc/icu/english         time:   [1.4000 ms 1.5000 ms 1.6000 ms]
nfc/my/russian          time:   [980.00 ns 990.00 ns 1.0000 µs]
Found 3 outliers among 100 measurements (3.00%)
words/my/english        time:   [2.0000 s 2.5000 s 3.0000 s]
";

        let groups = parse(output);

        assert_eq!(groups.keys().collect::<Vec<_>>(), ["nfc", "words"]);
        assert_eq!(make_csv(&groups["nfc"]), ";icu;my\nenglish;1500;10\nrussian;0;0\n");
        assert_eq!(make_csv(&groups["words"]), ";my\nenglish;2500000\n");
    }
}
