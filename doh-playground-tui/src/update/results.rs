//! 结果表格更新逻辑

use crate::message::ResultsMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ResultsMessage) {
    match msg {
        ResultsMessage::SelectPrevious => app.results.select_previous(),
        ResultsMessage::SelectNext => app.results.select_next(),
        ResultsMessage::SelectFirst => app.results.select_first(),
        ResultsMessage::SelectLast => app.results.select_last(),
    }
}
