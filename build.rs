fn main() {
    println!("cargo:rerun-if-changed=cfg.toml");

    // ESP-IDFの環境変数はターゲットビルド時のみ出力する
    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();
}
