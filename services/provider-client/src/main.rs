mod api;
mod app;
mod config;
mod view;

use api::ProviderApi;
use app::App;
use config::ClientConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// ビューポート幅の環境変数名
const COLUMNS_ENV: &str = "COLUMNS";

/// ビューポート幅のデフォルト値（カラム数）
const DEFAULT_COLUMNS: usize = 80;

/// ビューポート幅を環境変数から読み取る
fn viewport_columns() -> usize {
    std::env::var(COLUMNS_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_COLUMNS)
}

/// フォームとリストをまとめて描画する
fn render(app: &App, columns: usize) {
    println!();
    print!("{}", view::render_form(app.form(), app.edit_id()));
    println!();
    print!("{}", view::render_providers(app.providers(), columns));
}

fn print_help() {
    println!("Commands:");
    println!("  name <text>    提供会社名を入力");
    println!("  rate <text>    金利を入力（5文字まで）");
    println!("  amount <text>  融資上限額を入力（カンマは取り除かれる）");
    println!("  submit         フォームを送信（新規作成または更新）");
    println!("  edit <id>      指定idのプロバイダーを編集");
    println!("  cancel         編集をキャンセル");
    println!("  delete <id>    指定idのプロバイダーを削除");
    println!("  list           リストを再取得して表示");
    println!("  help           このヘルプを表示");
    println!("  quit           終了");
}

/// 入力1行を処理する
///
/// # 戻り値
/// * `true` - 続行
/// * `false` - 終了
async fn handle_command(app: &mut App, line: &str, columns: usize) -> bool {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => return true,
        "name" => {
            app.form_mut().set_provider_name(rest);
        }
        "rate" => {
            app.form_mut().set_interest_rate(rest);
        }
        "amount" => {
            app.form_mut().set_max_loan_amount(rest);
        }
        "submit" => {
            app.submit().await;
        }
        "edit" => match rest.parse() {
            Ok(id) => {
                if !app.begin_edit(id) {
                    println!("Provider {} not found", id);
                }
            }
            Err(_) => println!("Usage: edit <id>"),
        },
        "cancel" => {
            app.cancel_edit();
        }
        "delete" => match rest.parse() {
            Ok(id) => {
                app.delete(id).await;
            }
            Err(_) => println!("Usage: delete <id>"),
        },
        "list" => {
            app.load().await;
        }
        "help" => {
            print_help();
            return true;
        }
        "quit" | "exit" => return false,
        other => {
            println!("Unknown command: {} (try 'help')", other);
            return true;
        }
    }

    render(app, columns);
    true
}

#[tokio::main]
async fn main() {
    // ログは標準エラーに出す（標準出力は画面描画用）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    info!(api_url = config.api_url(), "Provider APIに接続");

    let columns = viewport_columns();
    let mut app = App::new(ProviderApi::new(config));

    // 起動時に全件取得
    app.load().await;
    render(&app, columns);
    println!();
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        if !handle_command(&mut app, &line, columns).await {
            break;
        }
    }

    info!("終了");
}
