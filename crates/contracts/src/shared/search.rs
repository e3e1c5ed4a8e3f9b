//! Универсальный текстовый поиск по спискам записей

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    ///
    /// `filter_lower` уже приведён к нижнему регистру.
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Регистронезависимая проверка вхождения подстроки
pub fn contains_ignore_case(text: &str, filter_lower: &str) -> bool {
    text.to_lowercase().contains(filter_lower)
}

/// Фильтрует записи по поисковому запросу.
///
/// Запрос обрезается по краям и приводится к нижнему регистру; пустой
/// (или из одних пробелов) запрос возвращает всё. Подсветка в UI
/// использует то же правило.
pub fn filter_list<'a, T, I>(items: I, filter: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let filter_lower = filter.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| filter_lower.is_empty() || item.matches_filter(&filter_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter_lower: &str) -> bool {
            contains_ignore_case(self.0, filter_lower)
        }
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Payroll Run", "payroll"));
        assert!(contains_ignore_case("Счёт-фактура", "счёт"));
        assert!(!contains_ignore_case("Payroll", "sales"));
    }

    #[test]
    fn test_filter_list() {
        let rows = [Row("Alpha"), Row("beta"), Row("ALPHABET")];
        assert_eq!(filter_list(&rows, "alpha").len(), 2);
        assert_eq!(filter_list(&rows, "").len(), 3);
        assert!(filter_list(&rows, "gamma").is_empty());
    }

    #[test]
    fn test_filter_list_trims_query() {
        let rows = [Row("Alpha"), Row("beta")];
        assert_eq!(filter_list(&rows, "  beta ").len(), 1);
        assert_eq!(filter_list(&rows, "   ").len(), 2);
    }

    #[test]
    fn test_filter_list_accepts_prefiltered_iterator() {
        let rows = [Row("Alpha"), Row("beta"), Row("ALPHABET")];
        let long = rows.iter().filter(|r| r.0.len() > 5);
        let found = filter_list(long, "alpha");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "ALPHABET");
    }
}
