/// Трейт для записей, адресуемых строковым идентификатором
///
/// Все операции по ID в view-model работают через этот трейт и
/// ничего не делают, если запись не найдена.
pub trait Record {
    /// Уникальный (в пределах коллекции) идентификатор записи
    fn record_id(&self) -> &str;
}

/// Найти запись по ID
pub fn find_record<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.record_id() == id)
}

/// Найти запись по ID для изменения
pub fn find_record_mut<'a, T: Record>(records: &'a mut [T], id: &str) -> Option<&'a mut T> {
    records.iter_mut().find(|r| r.record_id() == id)
}

/// Удалить запись по ID, сохраняя порядок остальных.
///
/// Возвращает удалённую запись или `None`, если ID не найден.
pub fn remove_record<T: Record>(records: &mut Vec<T>, id: &str) -> Option<T> {
    let pos = records.iter().position(|r| r.record_id() == id)?;
    Some(records.remove(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str);

    impl Record for Item {
        fn record_id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_find_record_mut() {
        let mut items = vec![Item("a"), Item("b")];
        assert!(find_record_mut(&mut items, "b").is_some());
        assert!(find_record_mut(&mut items, "z").is_none());
    }

    #[test]
    fn test_remove_record_keeps_order() {
        let mut items = vec![Item("a"), Item("b"), Item("c")];
        assert_eq!(remove_record(&mut items, "b"), Some(Item("b")));
        assert_eq!(items, vec![Item("a"), Item("c")]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut items = vec![Item("a")];
        assert_eq!(remove_record(&mut items, "x"), None);
        assert_eq!(items.len(), 1);
    }
}
