use avl_map::{AvlTreeMap, Error};

fn main() {
    let mut map = AvlTreeMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "two again");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");
    assert_eq!(map.get(&2), Some(&"two"));
    assert_eq!(map.at(&1), Ok(&"one"));
    map.remove(&1);
    assert_eq!(map.at(&1), Err(Error::KeyNotFound));

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    print!("reverse: ");
    let mut cursor = map.rbegin();
    while let Some(k) = cursor.key() {
        print!("{k} ");
        cursor.move_next();
    }
    println!();

    let mut counts: AvlTreeMap<&str, u32> = AvlTreeMap::new();
    for word in "the quick brown fox jumps over the lazy dog the end".split_whitespace() {
        *counts.get_or_default(word) += 1;
    }
    println!("{counts:?}");
}
