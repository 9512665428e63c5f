fn main() {
    mimic_shooter::game::run();
}
