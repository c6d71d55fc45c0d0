use uuid::Uuid;

/// 「已复制」角标，带代际令牌的定时清除
///
/// 每次复制都会领取一个新令牌，延时清除动作携带当初的
/// 令牌回来；令牌过期则什么都不做。这样旧定时器不会
/// 误清掉后来（同一条或另一条记录）的角标。
#[derive(Debug, Default)]
pub struct CopiedMarker {
    current: Option<(Uuid, u64)>,
    next_token: u64,
}

impl CopiedMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标记某条记录刚被复制，返回本次的清除令牌
    pub fn mark(&mut self, id: Uuid) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.current = Some((id, token));
        token
    }

    /// 执行定时清除；仅当令牌仍是最新时生效
    pub fn clear_if_current(&mut self, token: u64) -> bool {
        match self.current {
            Some((_, current)) if current == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_marked(&self, id: Uuid) -> bool {
        matches!(self.current, Some((marked, _)) if marked == id)
    }

    pub fn marked_id(&self) -> Option<Uuid> {
        self.current.map(|(id, _)| id)
    }
}
