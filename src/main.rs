use lume::LogoWidget;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/logo.png".to_string());

    if let Err(e) = LogoWidget::new(&path).run() {
        eprintln!("lume: {}", e);
        std::process::exit(1);
    }
}
