//! User-facing messages returned in result envelopes.

pub const SLIDE_GROUP_FETCHED: &str = "スライドグループを取得しました";
pub const SLIDE_FETCHED: &str = "スライドを取得しました";

pub const SLIDE_GROUP_CREATED: &str = "スライドグループを作成しました";
pub const SLIDE_GROUP_CREATE_FAILED: &str = "スライドグループの作成に失敗しました";
pub const SLIDE_GROUP_UPDATED: &str = "スライドグループを更新しました";
pub const SLIDE_GROUP_UPDATE_FAILED: &str = "スライドグループの更新に失敗しました";

pub const SLIDE_UPDATED: &str = "スライドを更新しました";
pub const SLIDE_UPDATE_FAILED: &str = "スライドの更新に失敗しました";
pub const SLIDE_UPLOADED: &str = "スライドをアップロードしました";
pub const SLIDE_UPLOAD_FAILED: &str = "スライドのアップロードに失敗しました";

pub const SIGNED_IN: &str = "ログインしました";
pub const SIGNED_OUT: &str = "ログアウトしました";

// Authorization
pub const NO_PERMISSION: &str = "権限がありません";
pub const LOGIN_REQUIRED: &str = "ログインしてください";
pub const ID_MISMATCH: &str = "IDが一致しません";
pub const INVALID_CREDENTIAL: &str = "認証情報が無効です";

// Validation
pub const SLIDE_GROUP_ID_REQUIRED: &str = "スライドグループIDは必須です";
pub const SLIDE_ID_REQUIRED: &str = "スライドIDは必須です";
pub const SPEAKER_ID_REQUIRED: &str = "発表者IDは必須です";
pub const ID_PATTERN: &str = "スライドIDは半角英数のみ有効です";
pub const TITLE_REQUIRED: &str = "タイトルは必須です";
pub const DATE_REQUIRED: &str = "日付を入力してください";
pub const DRIVE_ID_REQUIRED: &str = "Google Drive ID は必須です";
pub const PUBLISH_REQUIRED: &str = "公開設定を選択してください";
pub const INVALID_URL: &str = "有効なURLを入力してください";
pub const SLIDES_URL_REQUIRED: &str = "Google Slides URL は必須です";
pub const PDF_REQUIRED: &str = "PDFファイルを選択してください";
