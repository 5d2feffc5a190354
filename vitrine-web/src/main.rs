fn main() {
    vitrine_web::start();
}
