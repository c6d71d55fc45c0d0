use uuid::Uuid;

use super::models::ShortenedLink;

/// 会话期短链列表，新纪录排最前
///
/// 仅存活在进程内存里，由界面事件处理器独占修改，
/// 不做持久化。
#[derive(Debug, Default)]
pub struct SessionList {
    links: Vec<ShortenedLink>,
}

impl SessionList {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// 新记录插到头部
    pub fn prepend(&mut self, link: ShortenedLink) {
        self.links.insert(0, link);
    }

    /// 按 id 删除一条记录，保持其余记录相对顺序
    pub fn remove(&mut self, id: Uuid) -> Option<ShortenedLink> {
        let pos = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(pos))
    }

    /// 清空整个列表
    pub fn clear(&mut self) {
        self.links.clear();
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn links(&self) -> &[ShortenedLink] {
        &self.links
    }

    pub fn get(&self, index: usize) -> Option<&ShortenedLink> {
        self.links.get(index)
    }

    pub fn find(&self, id: Uuid) -> Option<&ShortenedLink> {
        self.links.iter().find(|l| l.id == id)
    }

    /// 同一个规范化 URL 是否已经生成过短链
    pub fn contains_original_url(&self, url: &str) -> bool {
        self.links.iter().any(|l| l.original_url == url)
    }

    /// 别名是否已被本会话内的短码占用
    pub fn is_code_taken(&self, code: &str) -> bool {
        self.links
            .iter()
            .any(|l| l.short_code.as_deref() == Some(code))
    }

    /// 「全部清除」只在多于一条记录时提供
    pub fn can_clear_all(&self) -> bool {
        self.links.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_link(original: &str, code: Option<&str>) -> ShortenedLink {
        ShortenedLink {
            id: Uuid::new_v4(),
            original_url: original.to_string(),
            short_url: match code {
                Some(c) => format!("https://sho.rt/{}", c),
                None => "https://tinyurl.com/abc123".to_string(),
            },
            short_code: code.map(|c| c.to_string()),
            created_at: chrono::Utc::now(),
            clicks: None,
        }
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut list = SessionList::new();
        list.prepend(make_link("https://a.com", None));
        list.prepend(make_link("https://b.com", None));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().original_url, "https://b.com");
        assert_eq!(list.get(1).unwrap().original_url, "https://a.com");
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = SessionList::new();
        let a = make_link("https://a.com", None);
        let b = make_link("https://b.com", None);
        let c = make_link("https://c.com", None);
        let b_id = b.id;
        list.prepend(a);
        list.prepend(b);
        list.prepend(c);

        let removed = list.remove(b_id).unwrap();
        assert_eq!(removed.original_url, "https://b.com");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().original_url, "https://c.com");
        assert_eq!(list.get(1).unwrap().original_url, "https://a.com");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = SessionList::new();
        list.prepend(make_link("https://a.com", None));

        assert!(list.remove(Uuid::new_v4()).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_lookup() {
        let mut list = SessionList::new();
        list.prepend(make_link("https://a.com", None));

        assert!(list.contains_original_url("https://a.com"));
        assert!(!list.contains_original_url("https://a.com/other"));
    }

    #[test]
    fn test_code_taken_lookup() {
        let mut list = SessionList::new();
        list.prepend(make_link("https://a.com", Some("docs")));
        list.prepend(make_link("https://b.com", None));

        assert!(list.is_code_taken("docs"));
        assert!(!list.is_code_taken("blog"));
    }

    #[test]
    fn test_clear_all_availability() {
        let mut list = SessionList::new();
        assert!(!list.can_clear_all());

        list.prepend(make_link("https://a.com", None));
        assert!(!list.can_clear_all());

        list.prepend(make_link("https://b.com", None));
        assert!(list.can_clear_all());

        list.clear();
        assert!(list.is_empty());
    }
}
