// 表示レイヤー
//
// 同一のプロバイダーリストを2つの形で描画する:
// - 広いビューポート: 表レイアウト
// - 狭いビューポート: 積み重ねカードレイアウト
// どちらも行ごとのEdit/Delete操作（シェルコマンド）を提示する。

use crate::api::Provider;
use crate::app::ProviderForm;

/// 表レイアウトを使う最小カラム数（これ未満はカードレイアウト）
pub const WIDE_VIEWPORT_MIN_COLUMNS: usize = 72;

/// リストが空のときに表示するメッセージ
pub const EMPTY_STATE_MESSAGE: &str = "No providers found. Add one above.";

/// 数字文字列に3桁ごとのカンマ区切りを挿入する
///
/// 符号と小数部はそのまま保持する（整数部のみを区切る）。
pub fn group_thousands(value: &str) -> String {
    let (sign, rest) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut grouped = String::new();
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// 金利の表示形式（末尾にパーセント記号）
pub fn format_rate(rate: f64) -> String {
    format!("{}%", rate)
}

/// 融資上限額の表示形式（先頭に通貨記号、3桁区切り）
pub fn format_amount(amount: f64) -> String {
    format!("${}", group_thousands(&amount.to_string()))
}

/// 行ごとの操作ヒント
fn row_actions(id: i64) -> String {
    format!("edit {} | delete {}", id, id)
}

/// プロバイダーリストを描画する
///
/// ビューポート幅（カラム数）に応じて表レイアウトとカードレイアウトを
/// 切り替える。リストが空の場合はどちらのレイアウトでも空状態メッセージを
/// 返す。ソート・フィルター・ページネーションは行わない。
pub fn render_providers(providers: &[Provider], columns: usize) -> String {
    if providers.is_empty() {
        return format!("{}\n", EMPTY_STATE_MESSAGE);
    }

    if columns >= WIDE_VIEWPORT_MIN_COLUMNS {
        render_table(providers)
    } else {
        render_cards(providers)
    }
}

/// 表レイアウト（広いビューポート用）
fn render_table(providers: &[Provider]) -> String {
    let headers = [
        "ID",
        "Provider Name",
        "Interest Rate",
        "Max Loan Amount",
        "Actions",
    ];

    // 各行のセルを先に文字列化し、カラム幅を揃える
    let rows: Vec<[String; 5]> = providers
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.provider_name.clone(),
                format_rate(p.interest_rate),
                format_amount(p.max_loan_amount),
                row_actions(p.id),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", header, width = widths[i]));
    }
    out.push('\n');

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }

    out
}

/// 積み重ねカードレイアウト（狭いビューポート用）
fn render_cards(providers: &[Provider]) -> String {
    let mut out = String::new();
    for (i, p) in providers.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("ID #{}\n", p.id));
        out.push_str(&format!("{}\n", p.provider_name));
        out.push_str(&format!("Interest: {}\n", format_rate(p.interest_rate)));
        out.push_str(&format!("Max Loan: {}\n", format_amount(p.max_loan_amount)));
        out.push_str(&format!("Actions: {}\n", row_actions(p.id)));
    }
    out
}

/// フォーム（編集バッファ）を描画する
///
/// 融資上限額は入力値に3桁区切りを付けて表示する（保持している値は
/// 区切りなしのまま）。編集モードでは対象のidを表示する。
pub fn render_form(form: &ProviderForm, edit_id: Option<i64>) -> String {
    let mode = match edit_id {
        Some(id) => format!("[Editing provider {}]", id),
        None => "[New provider]".to_string(),
    };

    let amount_display = if form.max_loan_amount.is_empty() {
        String::new()
    } else {
        group_thousands(&form.max_loan_amount)
    };

    format!(
        "{}\nProvider Name   : {}\nInterest Rate   : {}\nMax Loan Amount : {}\n",
        mode, form.provider_name, form.interest_rate, amount_display
    )
}
