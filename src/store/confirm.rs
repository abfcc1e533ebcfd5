//! Yes/no questions asked before destructive operations.

pub const DELETE_FOLDER_PROMPT: &str = "정말로 삭제하시겠습니까?";
pub const DELETE_FOLDER_RECONSIDER_PROMPT: &str = "다시 한번 생각해 보세요";
pub const DELETE_WORDS_PROMPT: &str = "선택한 단어를 삭제하시겠습니까?";
pub const REPLACE_WORDS_PROMPT: &str = "현재 단어 목록을 가져온 목록으로 바꾸시겠습니까?";

/// Capability to ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
