use std::fs;
use std::io::Read;

/// данные на разных языках для тестов
pub fn files() -> Vec<(String, String)>
{
    let dir = fs::read_dir("./../test_data/texts").unwrap();

    let mut data = vec![];

    for entry in dir {
        let entry = entry.unwrap();

        let path = entry.path();
        let path = path.to_str().unwrap();

        data.push((get_name(path).to_owned(), read(path)));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// тест разбиения: текст и смещения границ (в байтах), включая начало и конец текста
pub struct BreakTest
{
    pub line: usize,
    pub text: String,
    pub breaks: Vec<usize>,
}

/// тесты разбиения в формате "÷ 0020 × 0308 ÷ 0020 ÷"
pub fn break_tests(source: &str) -> Vec<BreakTest>
{
    let content = read(source);
    let mut tests = vec![];

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();

        if !line.starts_with('÷') {
            continue;
        }

        let mut text = String::new();
        let mut breaks = vec![0];

        for token in line.split_whitespace().skip(1) {
            match token {
                "÷" => breaks.push(text.len()),
                "×" => (),
                code => text.push(char::from_u32(u32::from_str_radix(code, 16).unwrap()).unwrap()),
            }
        }

        tests.push(BreakTest {
            line: index + 1,
            text,
            breaks,
        });
    }

    tests
}

/// строка тестов нормализации: c1..c5 и источник
pub struct NormalizationTest
{
    pub part: String,
    pub line: usize,
    pub description: String,
    pub c1: String,
    pub c2: String,
    pub c3: String,
    pub c4: String,
    pub c5: String,
}

/// тесты нормализации в формате NormalizationTest.txt: "c1;c2;c3;c4;c5; # описание"
pub fn normalization_tests(source: &str) -> Vec<NormalizationTest>
{
    let content = read(source);
    let mut tests = vec![];
    let mut part = String::new();

    for (index, line) in content.lines().enumerate() {
        let (data, description) = match line.split_once('#') {
            Some((data, description)) => (data.trim(), description.trim()),
            None => (line.trim(), ""),
        };

        if data.is_empty() {
            continue;
        }

        if let Some(name) = data.strip_prefix('@') {
            part = name.to_owned();
            continue;
        }

        let columns: Vec<String> = data.split(';').take(5).map(parse_codes).collect();

        assert_eq!(columns.len(), 5, "строка {}", index + 1);

        tests.push(NormalizationTest {
            part: part.clone(),
            line: index + 1,
            description: description.to_owned(),
            c1: columns[0].clone(),
            c2: columns[1].clone(),
            c3: columns[2].clone(),
            c4: columns[3].clone(),
            c5: columns[4].clone(),
        });
    }

    tests
}

/// строка из последовательности кодов через пробел: "0044 0307"
fn parse_codes(codes: &str) -> String
{
    codes
        .split_whitespace()
        .map(|code| char::from_u32(u32::from_str_radix(code, 16).unwrap()).unwrap())
        .collect()
}

/// прочитать файл
fn read(source: &str) -> String
{
    let mut file = fs::File::open(source).unwrap();
    let mut result = String::new();

    file.read_to_string(&mut result).unwrap();

    result
}

/// вырезать из полного пути к файлу его название, без формата
fn get_name(filename: &str) -> &str
{
    let (_, name) = filename.trim_end_matches(".txt").rsplit_once('/').unwrap();

    name
}
