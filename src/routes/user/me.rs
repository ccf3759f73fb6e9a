use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::MeRes;
use crate::utils::webutils::AuthUser;

#[get("")]
async fn me(
    _req: actix_web::HttpRequest,
    user: AuthUser,
) -> ApiResult<MeRes> {
    Ok(ApiResponse::Ok(MeRes::from(&user.0)))
}
