fn main() {
    pptx_gen_ui::run();
}
