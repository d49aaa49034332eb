//! Books loaded into a fresh catalog when seeding is enabled

use crate::models::book::Book;

const SEED_BOOKS: &[(&str, &str, &str)] = &[
    ("1", "Harry Potter and the Chamber of Secrets", "J.K. Rowling"),
    ("2", "Jurassic Park", "Michael Crichton"),
    ("3", "百年孤独", "加夫列尔·加西亚·马尔克斯"),
    ("4", "根鸟", "曹文轩"),
    ("5", "西游记", "吴承恩"),
    ("6", "三国演义", "罗贯中"),
    ("7", "红楼梦", "曹雪芹"),
    ("8", "水浒传", "施耐庵"),
    ("9", "荷马史诗", "荷马"),
    ("10", "伊索寓言", "古希腊奴隶"),
    ("11", "理想国", "柏拉图"),
    ("12", "物性论", "卢克莱修"),
    ("13", "亚历山大远征记", "阿里安"),
    ("14", "马可·波罗游记", "马可·波罗"),
    ("15", "坎特伯雷故事集", "杰弗雷·乔叟"),
];

/// The default catalog, in listing order
pub fn default_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, title, author)| Book::new(id, title, author))
        .collect()
}
