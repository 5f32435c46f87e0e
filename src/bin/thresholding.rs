use vision_tour::Lesson;

fn main() {
    env_logger::init();
    vision_tour::run_standalone(Lesson::Thresholding);
}
