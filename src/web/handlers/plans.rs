use actix_web::{HttpRequest, Responder, get, post, web};

use briefshelf::db;
use briefshelf::models::Plan;

use crate::web::forms::{CheckoutForm, PlanQuery};
use crate::web::helpers::{current_user, redirect_to, render};
use crate::web::state::AppState;
use crate::web::templates::{CheckoutTemplate, ChoosePlanTemplate};

fn plan_price(plan: Plan) -> &'static str {
    match plan {
        Plan::Monthly => "$9.99/month",
        // Free never reaches checkout; the fallback plan is yearly.
        Plan::Yearly | Plan::Free => "$99.99/year",
    }
}

#[get("/choose-plan")]
pub async fn choose_plan(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = current_user(&state.pool, &req).await;

    render(ChoosePlanTemplate {
        logged_in: user.is_some(),
        active: "",
        current_plan: user
            .as_ref()
            .filter(|u| u.is_premium())
            .map(|u| u.plan.to_string()),
        is_guest: user.as_ref().is_some_and(|u| u.is_guest()),
    })
}

#[get("/checkout")]
pub async fn checkout(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PlanQuery>,
) -> impl Responder {
    let user = match current_user(&state.pool, &req).await {
        Some(user) => user,
        None => return redirect_to(&req, "/login"),
    };

    // Guests have no durable identity to attach a subscription to.
    if user.is_guest() {
        return redirect_to(&req, "/register");
    }

    let plan = Plan::from_checkout_param(query.plan.as_deref().unwrap_or(""));

    render(CheckoutTemplate {
        plan: plan.to_string(),
        price: plan_price(plan),
    })
}

#[post("/checkout")]
pub async fn checkout_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<CheckoutForm>,
) -> impl Responder {
    let user = match current_user(&state.pool, &req).await {
        Some(user) => user,
        None => return redirect_to(&req, "/login"),
    };

    if user.is_guest() {
        return redirect_to(&req, "/register");
    }

    let plan = Plan::from_checkout_param(&form.plan);

    match db::set_user_plan(&state.pool, user.id, plan).await {
        Ok(Some(_)) => redirect_to(&req, "/for-you"),
        Ok(None) => redirect_to(&req, "/login"),
        Err(e) => {
            log::error!("Failed to activate plan: {}", e);
            redirect_to(&req, "/choose-plan")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(choose_plan)
        .service(checkout)
        .service(checkout_submit);
}
