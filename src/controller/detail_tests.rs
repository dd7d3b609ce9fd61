//! Tests for the Detail controller.

use super::*;
use crate::links::testing::RecordingOpener;
use crate::model::{CollectionPoint, Item};

fn point_id(raw: u32) -> PointId {
    PointId::new(raw).unwrap()
}

fn sample_detail() -> PointDetail {
    PointDetail {
        point: CollectionPoint {
            image_url: "http://localhost:3333/uploads/mercado.jpg".into(),
            name: "Mercado do Zé".into(),
            email: "ze@mercado.com".into(),
            whatsapp: "5511999998888".into(),
            city: "Campinas".into(),
            uf: "SP".into(),
        },
        items: vec![
            Item {
                title: "Lâmpadas".into(),
            },
            Item {
                title: "Pilhas e Baterias".into(),
            },
        ],
    }
}

fn loaded() -> DetailController {
    let mut detail = DetailController::new(ScreenId::new(3), point_id(7));
    let request = detail.mount();
    assert!(detail.point_loaded(request.ticket, Ok(sample_detail())));
    detail
}

#[test]
fn mount_requests_the_point() {
    let mut detail = DetailController::new(ScreenId::new(3), point_id(7));
    let request = detail.mount();
    assert_eq!(request.kind, FetchKind::Point { id: point_id(7) });
    assert_eq!(detail.state().phase, LoadPhase::Loading);
    assert!(detail.state().data.is_none());
}

#[test]
fn loaded_point_is_stored_verbatim() {
    let detail = loaded();
    assert_eq!(detail.state().data, Some(sample_detail()));
    assert_eq!(detail.state().phase, LoadPhase::Loaded);
}

#[test]
fn failed_fetch_keeps_screen_blank() {
    let mut detail = DetailController::new(ScreenId::new(3), point_id(7));
    let request = detail.mount();
    detail.point_loaded(request.ticket, Err(ApiError::status("points/7", 404)));
    assert!(detail.state().data.is_none());
}

#[test]
fn late_result_after_unmount_is_discarded() {
    let mut detail = DetailController::new(ScreenId::new(3), point_id(7));
    let request = detail.mount();
    detail.unmount();
    assert!(!detail.point_loaded(request.ticket, Ok(sample_detail())));
    assert!(detail.state().data.is_none());
}

#[test]
fn go_back_only_navigates_back() {
    let detail = loaded();
    assert_eq!(detail.go_back(), Navigate::Back);
    assert!(detail.state().alert.is_none());
}

#[test]
fn compose_email_opens_mailto_when_supported() {
    let mut detail = loaded();
    let opener = RecordingOpener::supporting();
    detail.compose_email(&opener);
    assert_eq!(
        *opener.opened.borrow(),
        vec!["mailto:ze@mercado.com?subject=Interesse na coleta de resíduos".to_string()]
    );
    assert!(detail.state().alert.is_none());
}

#[test]
fn unsupported_mailto_raises_alert_without_opening() {
    let mut detail = loaded();
    let opener = RecordingOpener::unsupporting();
    detail.compose_email(&opener);
    assert!(opener.opened.borrow().is_empty());
    assert_eq!(
        detail.state().alert,
        Some(Alert {
            title: "Ooooops....".into(),
            message: "Ocorreu um erro ao enviar e-mail, tente novamente".into(),
        })
    );
}

#[test]
fn launch_failure_raises_alert() {
    let mut detail = loaded();
    detail.compose_email(&RecordingOpener::failing("no handler"));
    assert!(detail.state().alert.is_some());
}

#[test]
fn dismiss_alert_clears_it() {
    let mut detail = loaded();
    detail.compose_email(&RecordingOpener::unsupporting());
    detail.dismiss_alert();
    assert!(detail.state().alert.is_none());
}

#[test]
fn whatsapp_opens_without_capability_check() {
    let detail = loaded();
    let opener = RecordingOpener::unsupporting();
    detail.open_whatsapp(&opener);
    assert!(opener.checked.borrow().is_empty());
    assert_eq!(
        *opener.opened.borrow(),
        vec![
            "whatsapp://send?phone=5511999998888&text=Tenho interesse sobre coleta de resíduos."
                .to_string()
        ]
    );
}

#[test]
fn whatsapp_failure_shows_no_alert() {
    let detail = loaded();
    detail.open_whatsapp(&RecordingOpener::failing("not installed"));
    assert!(detail.state().alert.is_none());
}

#[test]
fn link_actions_before_load_do_nothing() {
    let mut detail = DetailController::new(ScreenId::new(3), point_id(7));
    detail.mount();
    let opener = RecordingOpener::supporting();
    detail.compose_email(&opener);
    detail.open_whatsapp(&opener);
    assert!(opener.checked.borrow().is_empty());
    assert!(opener.opened.borrow().is_empty());
    assert!(detail.state().alert.is_none());
}
