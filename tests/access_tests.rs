mod common;

#[cfg(test)]
pub mod access_tests {
    use super::common::*;

    use briefshelf::services::access::{Gate, gate, gate_save};

    #[test]
    fn test_gate_sends_signed_out_reader_to_login() {
        let book = make_book("b1", "Atomic Habits", "James Clear");

        assert_eq!(gate(&book, None), Gate::Login);
    }

    #[test]
    fn test_gate_sends_signed_out_reader_to_login_even_for_premium_title() {
        // Login always wins over the plan redirect.
        let book = make_premium_book("b1", "Can't Hurt Me", "David Goggins");

        assert_eq!(gate(&book, None), Gate::Login);
    }

    #[test]
    fn test_gate_admits_signed_in_reader_to_free_title() {
        let book = make_book("b1", "Atomic Habits", "James Clear");
        let user = get_seed_user_free();

        assert_eq!(gate(&book, Some(&user)), Gate::Proceed);
    }

    #[test]
    fn test_gate_sends_free_plan_to_choose_plan_for_premium_title() {
        let book = make_premium_book("b1", "Can't Hurt Me", "David Goggins");
        let user = get_seed_user_free();

        assert_eq!(gate(&book, Some(&user)), Gate::ChoosePlan);
    }

    #[test]
    fn test_gate_admits_premium_plan_to_premium_title() {
        let book = make_premium_book("b1", "Can't Hurt Me", "David Goggins");
        let user = get_seed_user_premium();

        assert_eq!(gate(&book, Some(&user)), Gate::Proceed);
    }

    #[test]
    fn test_gate_treats_guest_as_free_plan() {
        let book = make_premium_book("b1", "Can't Hurt Me", "David Goggins");
        let guest = get_seed_user_guest();

        assert_eq!(gate(&book, Some(&guest)), Gate::ChoosePlan);
    }

    #[test]
    fn test_gate_save_requires_session_only() {
        let user = get_seed_user_free();

        assert_eq!(gate_save(None), Gate::Login);
        assert_eq!(gate_save(Some(&user)), Gate::Proceed);
    }
}
