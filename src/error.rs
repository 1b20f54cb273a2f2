/// crate固有のエラー型.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(trackable::error::TrackableError<ErrorKind>);

/// 発生し得るエラーの種別.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 入力が区切り値の列として解釈できない.
    ///
    /// JSON等の型付けが緩い入力からアロケータを構築する際に、
    /// 入力が配列ではない場合や、配列の要素が区切り値の型に変換できない場合に返される.
    ///
    /// # 典型的な対応策
    ///
    /// - 利用者側のプログラムや設定を修正して入力を正しくする
    InvalidArgument,

    /// その他エラー.
    Other,
}
impl trackable::error::ErrorKind for ErrorKind {}
