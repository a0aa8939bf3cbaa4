use super::*;

fn notice(id: &str, priority: NoticePriority) -> Notice {
    Notice {
        id: id.to_owned(),
        title: id.to_owned(),
        content: String::new(),
        date: "2024-01-01".to_owned(),
        priority,
    }
}

#[test]
fn important_notices_come_first_in_stable_order() {
    let ordered = order_notices(vec![
        notice("a", NoticePriority::Normal),
        notice("b", NoticePriority::Important),
        notice("c", NoticePriority::Normal),
        notice("d", NoticePriority::Important),
    ]);
    let ids: Vec<&str> = ordered.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["b", "d", "a", "c"]);
}
