// ============================================================
// Layer 1 — Presenter
// ============================================================
// Turns use-case responses into terminal text. Nothing here
// decides anything; every method writes one screen fragment
// to the given writer.
//
//   search screen: load banner / error, result blocks,
//                  "not found" notice, sample preview, guide
//   quiz screen:   question, check feedback, final score
//
// Category labels are coloured with 24-bit ANSI escapes chosen
// by the tagging rule (Layer 5). With colour off they print as
// plain text.

use std::io::{self, Write};

use crate::application::{
    quiz_use_case::{CheckOutcome, QuizResults},
    search_use_case::{Preview, SearchResponse},
};
use crate::domain::{error::LoadError, item_record::ItemRecord, quiz_question::QuizQuestion};
use crate::search::category::tag;

const RULE: &str = "────────────────────────────────────────";

const GUIDE: &str = "\
🔍 検索方法:
  - 捨てたいゴミの品目名を入力してください
  - 完全一致で見つからない場合は、部分一致で検索します
  - 例：「缶」と入力すると「空き缶」「缶詰」などが見つかります

📋 表示情報:
  - 品目: ゴミの名前
  - 分別区分: どの種類のゴミか
  - 出し方: どの袋に入れるか
  - 注意点: 特別な注意事項（ある場合）

💡 検索のコツ:
  - 品目名の一部だけでも検索できます
  - ひらがな・カタカナ・漢字どれでも検索可能です
  - 大文字・小文字は区別されません

⌨️  コマンド: :sample（データの例） :help（使い方） :quit（終了）";

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    // ── Search screen ────────────────────────────────────────────────────────

    pub fn title(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "🗂️ 日田市ゴミ分別検索")?;
        writeln!(out, "{RULE}")
    }

    /// Dataset state shown once at the top of the search screen.
    pub fn load_status(&self, out: &mut impl Write, status: &Result<usize, LoadError>) -> io::Result<()> {
        match status {
            Ok(rows) => writeln!(out, "✅ データ読み込み完了 ({rows}件の品目データ)"),
            Err(e)   => writeln!(out, "❌ {e}"),
        }
    }

    pub fn search_prompt(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "🔍 ゴミの品目を入力してください（例：アイロン、空き缶、ペットボトル など）")
    }

    pub fn response(&self, out: &mut impl Write, response: &SearchResponse) -> io::Result<()> {
        match response {
            SearchResponse::Unavailable(e) => {
                writeln!(out, "❌ {e}")?;
                writeln!(out, "データが読み込まれていないため検索できません。")
            }
            SearchResponse::BlankQuery => writeln!(out, "⚠️ 検索する品目名を入力してください。"),
            SearchResponse::NotFound { .. } => {
                writeln!(out, "📋 検索結果")?;
                writeln!(out, "⚠️ 該当する品目が見つかりませんでした。")?;
                writeln!(out, "💡 ヒント: 品目名の一部だけでも検索できます（例：「缶」「ビン」「プラ」など）")
            }
            SearchResponse::Found { hits, .. } => {
                writeln!(out, "📋 検索結果")?;
                writeln!(out, "🎯 {}件の結果が見つかりました", hits.len())?;
                for record in &hits.records {
                    self.record(out, record)?;
                }
                Ok(())
            }
        }
    }

    fn record(&self, out: &mut impl Write, r: &ItemRecord) -> io::Result<()> {
        writeln!(out, "🏷️ 品目      {}", r.item_name)?;
        writeln!(out, "♻️ 分別区分  {}", self.category(&r.category))?;
        writeln!(out, "📦 出し方    {}", r.disposal_method)?;
        if let Some(notes) = r.visible_notes() {
            writeln!(out, "⚠️ 注意点    {notes}")?;
        }
        writeln!(out, "{RULE}")
    }

    /// Category label styled by the tagging rule
    pub fn category(&self, label: &str) -> String {
        if !self.color {
            return label.to_string();
        }
        match tag(label).rgb() {
            Some((r, g, b)) => format!("\x1b[1;38;2;{r};{g};{b}m{label}\x1b[0m"),
            None            => format!("\x1b[1m{label}\x1b[0m"),
        }
    }

    pub fn preview(&self, out: &mut impl Write, preview: &Result<Preview, LoadError>) -> io::Result<()> {
        let preview = match preview {
            Ok(p)  => p,
            Err(e) => return writeln!(out, "❌ {e}"),
        };

        writeln!(out, "📊 データの例（最初の{}件）", preview.rows().len())?;
        writeln!(out, "{}", preview.headers().join(" | "))?;
        for row in preview.rows() {
            writeln!(out, "{}", row.join(" | "))?;
        }
        Ok(())
    }

    pub fn guide(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "❓ 使い方")?;
        writeln!(out, "{GUIDE}")
    }

    // ── Quiz screen ──────────────────────────────────────────────────────────

    pub fn quiz_title(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "🧒 ごみ分別クイズ")?;
        writeln!(out, "正しいごみの分け方を学ぼう！")?;
        writeln!(out)?;
        writeln!(out, "クイズに答えてみよう！")
    }

    pub fn question(&self, out: &mut impl Write, number: usize, q: &QuizQuestion) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Q{number}. {}", q.prompt())?;
        for (i, option) in q.options().iter().enumerate() {
            writeln!(out, "  {}) {option}", i + 1)?;
        }
        write!(out, "こたえをえらんでね：")?;
        out.flush()
    }

    pub fn invalid_choice(&self, out: &mut impl Write, options: usize) -> io::Result<()> {
        writeln!(out, "1〜{options} の番号をえらんでね。")
    }

    pub fn check_outcome(&self, out: &mut impl Write, outcome: &CheckOutcome) -> io::Result<()> {
        if outcome.correct {
            writeln!(out, "⭕ せいかい！")?;
        } else {
            writeln!(out, "❌ ざんねん…")?;
        }
        writeln!(out, "💡 かいせつ：{}", outcome.explanation)
    }

    /// Shown after every question has been asked once.
    pub fn review_prompt(&self, out: &mut impl Write, questions: usize) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "もういちどこたえる問題の番号（1〜{questions}）、または :results でけっかをみる")?;
        write!(out, "> ")?;
        out.flush()
    }

    pub fn invalid_review(&self, out: &mut impl Write, questions: usize) -> io::Result<()> {
        writeln!(out, "1〜{questions} の番号か :results を入力してね。")
    }

    pub fn results(&self, out: &mut impl Write, results: &QuizResults) -> io::Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(out, "🎉 クイズのけっか")?;
        writeln!(out, "あなたのスコア：{} / {}", results.score, results.total)?;
        if results.perfect {
            writeln!(out, "🎈🎈🎈 すごい！ぜんもんせいかい！")?;
        }
        Ok(())
    }
}
