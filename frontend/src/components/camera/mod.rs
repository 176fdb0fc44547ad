//! Camera capture dialog for the product photo.
//!
//! Asking for the stream is the permission request: a rejected `getUserMedia`
//! call means the user denied camera access (or has no camera), and capture
//! aborts with an explanatory notice before any UI opens. A granted stream
//! opens an overlay with a live preview; capturing grabs the current video
//! frame through a canvas and hands it to the parent as base64 JPEG.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::sheets::overlay::{Overlay, close_overlay, open_overlay};
use crate::toast::{Notice, show_toast};

const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

pub enum Msg {
    RequestCamera,
    StreamReady(MediaStream),
    CameraUnavailable(Option<String>),
    Capture,
    Cancel,
}

#[derive(Properties, PartialEq)]
pub struct CameraCaptureProps {
    /// Receives the captured frame as base64-encoded JPEG bytes, without the
    /// data URL prefix.
    pub on_capture: Callback<String>,
}

pub struct CameraCapture {
    dialog_ref: NodeRef,
    video_ref: NodeRef,
    canvas_ref: NodeRef,
    stream: Option<MediaStream>,
}

impl Component for CameraCapture {
    type Message = Msg;
    type Properties = CameraCaptureProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dialog_ref: NodeRef::default(),
            video_ref: NodeRef::default(),
            canvas_ref: NodeRef::default(),
            stream: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RequestCamera => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match request_stream().await {
                        Ok(stream) => link.send_message(Msg::StreamReady(stream)),
                        Err(err) => link.send_message(Msg::CameraUnavailable(error_name(&err))),
                    }
                });
                false
            }
            Msg::StreamReady(stream) => {
                if let Some(video) = self.video_ref.cast::<HtmlVideoElement>() {
                    video.set_src_object(Some(&stream));
                    let _ = video.play();
                }
                self.stream = Some(stream);
                open_overlay(&self.dialog_ref);
                true
            }
            Msg::CameraUnavailable(name) => {
                let denied = matches!(
                    name.as_deref(),
                    Some("NotAllowedError") | Some("PermissionDeniedError")
                );
                if denied {
                    show_toast(Notice::Error, "É necessário permitir o acesso à câmera.");
                } else {
                    show_toast(Notice::Error, "Não foi possível acessar a câmera.");
                }
                false
            }
            Msg::Capture => {
                match self.grab_frame() {
                    Some(base64) => ctx.props().on_capture.emit(base64),
                    None => show_toast(Notice::Error, "Não foi possível capturar a foto."),
                }
                self.shut_down();
                true
            }
            Msg::Cancel => {
                self.shut_down();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <button class="button" onclick={link.callback(|_| Msg::RequestCamera)}>
                    {"Adicionar Foto"}
                </button>
                <Overlay node_ref={self.dialog_ref.clone()}>
                    <div class="camera-dialog">
                        <video
                            ref={self.video_ref.clone()}
                            autoplay={true}
                            playsinline={true}
                            class="camera-preview"
                        />
                        <canvas ref={self.canvas_ref.clone()} style="display:none;" />
                        <div class="camera-actions">
                            <button class="button" onclick={link.callback(|_| Msg::Capture)}>
                                {"Capturar"}
                            </button>
                            <button class="button secondary" onclick={link.callback(|_| Msg::Cancel)}>
                                {"Cancelar"}
                            </button>
                        </div>
                    </div>
                </Overlay>
            </>
        }
    }
}

impl CameraCapture {
    /// Draws the current video frame into the hidden canvas and exports it as
    /// base64 JPEG. `None` when the stream produced no usable frame yet.
    fn grab_frame(&self) -> Option<String> {
        let video = self.video_ref.cast::<HtmlVideoElement>()?;
        let canvas = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        if video.video_width() == 0 || video.video_height() == 0 {
            return None;
        }
        canvas.set_width(video.video_width());
        canvas.set_height(video.video_height());
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        context
            .draw_image_with_html_video_element(&video, 0.0, 0.0)
            .ok()?;
        let data_url = canvas.to_data_url_with_type("image/jpeg").ok()?;
        data_url
            .strip_prefix(JPEG_DATA_URL_PREFIX)
            .map(|base64| base64.to_string())
    }

    /// Releases the camera and hides the dialog. Leaving tracks running keeps
    /// the device light on.
    fn shut_down(&mut self) {
        if let Some(stream) = self.stream.take() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
        close_overlay(&self.dialog_ref);
    }
}

async fn request_stream() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream = JsFuture::from(promise).await?;
    stream.dyn_into::<MediaStream>()
}

fn error_name(err: &JsValue) -> Option<String> {
    Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
}
