use serde::{Deserialize, Serialize};

use super::{BookTitle, Requester};

/// コマンド：書籍を借りる
///
/// `requester`は在庫がない場合に待ちリストへ並べる利用者名。
/// 省略した場合、在庫がなければ貸出は拒否される。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub title: BookTitle,
    pub requester: Option<Requester>,
}

/// コマンド：書籍を返却する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub title: BookTitle,
}
