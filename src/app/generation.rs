use super::*;
use crate::source::validate_payload;
use log::{error, info, warn};
use std::sync::mpsc::{self, TryRecvError};

/// Pedido feito à fonte de questões ao sair da configuração
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: usize,
    pub mode: QuizMode,
}

impl QuizSession {
    /// Configuring -> Loading. Devolve o pedido a ser enviado à fonte.
    pub fn request_start(&mut self) -> Option<GenerationRequest> {
        if !matches!(self.screen, Screen::Configuring { .. }) {
            self.ignored("start");
            return None;
        }
        if self.config.count == 0 {
            self.screen = Screen::Configuring {
                error: Some("Escolha pelo menos uma questão.".into()),
            };
            return None;
        }

        let request = GenerationRequest {
            count: self.config.count,
            mode: self.config.mode,
        };
        info!(
            "Gerando simulado: {} questões, modo {}",
            request.count, request.mode
        );
        // o erro anterior some aqui; a configuração fica
        self.screen = Screen::Loading { request };
        Some(request)
    }

    /// Loading -> InProgress (sucesso) ou Configuring (falha). Só vale uma vez por tentativa.
    pub fn finish_generation(&mut self, result: Result<QuizPayload, GenerationError>) -> bool {
        let request = match &self.screen {
            Screen::Loading { request } => *request,
            _ => {
                warn!(
                    "Resultado de geração recebido fora da tela de carregamento ({})",
                    self.screen.name()
                );
                return false;
            }
        };

        match result.and_then(|quiz| validate_payload(quiz, request.count, request.mode)) {
            Ok(quiz) => {
                info!("Simulado pronto com {} questões", quiz.len());
                self.screen = Screen::InProgress {
                    quiz,
                    index: 0,
                    answers: AnswerSheet::new(),
                };
            }
            Err(err) => {
                error!("Erro ao gerar simulado: {err}");
                self.screen = Screen::Configuring {
                    error: Some(err.user_message().to_string()),
                };
            }
        }
        true
    }

    /// Início síncrono: pede, espera a fonte e aplica o resultado.
    pub fn start_with(&mut self, source: &dyn crate::source::QuestionSource) -> bool {
        match self.request_start() {
            Some(request) => self.finish_generation(source.generate(request.count, request.mode)),
            None => false,
        }
    }
}

impl QuizApp {
    pub fn start_quiz(&mut self) {
        if self.pending.is_some() {
            warn!("Já existe uma geração em andamento");
            return;
        }
        if let Some(request) = self.session.request_start() {
            self.spawn_generation(request);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_generation(&mut self, request: GenerationRequest) {
        let source = Arc::clone(&self.source);
        let (tx, rx) = mpsc::channel();

        let spawned = std::thread::Builder::new()
            .name("gerador-simulado".into())
            .spawn(move || {
                let result = source.generate(request.count, request.mode);
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => self.pending = Some(rx),
            Err(err) => {
                self.session
                    .finish_generation(Err(GenerationError::Transport(err.to_string())));
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_generation(&mut self, request: GenerationRequest) {
        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);

        match &self.client {
            Ok(client) => {
                let client = client.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = client.generate_async(request.count, request.mode).await;
                    let _ = tx.send(result);
                });
            }
            Err(reason) => {
                let _ = tx.send(Err(GenerationError::Unavailable(reason.clone())));
            }
        }
    }

    /// Chamado a cada frame. Devolve true se a tela mudou.
    pub fn poll_generation(&mut self) -> bool {
        let Some(rx) = self.pending.as_ref() else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            // a thread morreu sem responder
            Err(TryRecvError::Disconnected) => Err(GenerationError::Interrupted),
        };

        self.pending = None;
        self.session.finish_generation(result)
    }

    pub fn is_generation_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;
    use crate::scoring::tests::payload_with_key;
    use crate::source::{GENERATION_FAILED_MESSAGE, QuestionSource};
    use std::time::{Duration, Instant};

    struct FakeSource {
        fail: bool,
    }

    impl QuestionSource for FakeSource {
        fn generate(&self, count: usize, mode: QuizMode) -> Result<QuizPayload, GenerationError> {
            if self.fail {
                Err(GenerationError::Transport("sem rede".into()))
            } else {
                Ok(payload_with_key(&vec![Answer::Certo; count], mode))
            }
        }
    }

    struct PanickingSource;

    impl QuestionSource for PanickingSource {
        fn generate(&self, _count: usize, _mode: QuizMode) -> Result<QuizPayload, GenerationError> {
            panic!("fonte quebrou");
        }
    }

    fn configured(count: usize, mode: QuizMode) -> QuizSession {
        QuizSession::with_config(QuizConfig { count, mode })
    }

    #[test]
    fn start_moves_to_loading_then_in_progress() {
        let mut session = configured(3, QuizMode::Prova);
        let request = session.request_start().unwrap();
        assert_eq!(request, GenerationRequest { count: 3, mode: QuizMode::Prova });
        assert!(matches!(session.screen(), Screen::Loading { .. }));

        let ok = FakeSource { fail: false }.generate(request.count, request.mode);
        assert!(session.finish_generation(ok));
        match session.screen() {
            Screen::InProgress { quiz, index, answers } => {
                assert_eq!(quiz.len(), 3);
                assert_eq!(*index, 0);
                assert!(answers.is_empty());
            }
            other => panic!("tela inesperada: {other:?}"),
        }
    }

    #[test]
    fn failure_returns_to_configuring_keeping_config() {
        let mut session = configured(50, QuizMode::Prova);
        assert!(session.start_with(&FakeSource { fail: true }));

        assert_eq!(session.error_message(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(session.config, QuizConfig { count: 50, mode: QuizMode::Prova });
        assert!(session.quiz().is_none());
    }

    #[test]
    fn next_attempt_clears_previous_error() {
        let mut session = configured(2, QuizMode::Treino);
        session.start_with(&FakeSource { fail: true });
        assert!(session.error_message().is_some());

        session.request_start();
        assert!(session.error_message().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn loading_is_exited_only_once() {
        let mut session = configured(1, QuizMode::Treino);
        session.request_start();
        assert!(session.finish_generation(Err(GenerationError::EmptyResponse)));
        // segundo resultado chega tarde: ignorado
        let late = Ok(payload_with_key(&[Answer::Certo], QuizMode::Treino));
        assert!(!session.finish_generation(late));
        assert!(session.quiz().is_none());
    }

    #[test]
    fn payload_mismatch_is_a_failure() {
        let mut session = configured(20, QuizMode::Treino);
        session.request_start();
        session.finish_generation(Ok(payload_with_key(&[Answer::Certo; 5], QuizMode::Treino)));
        assert_eq!(session.error_message(), Some(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn empty_payload_is_a_failure() {
        let mut session = configured(1, QuizMode::Treino);
        session.request_start();
        session.finish_generation(Ok(payload_with_key(&[], QuizMode::Treino)));
        assert!(matches!(session.screen(), Screen::Configuring { error: Some(_) }));
    }

    #[test]
    fn zero_count_never_leaves_configuring() {
        let mut session = configured(0, QuizMode::Treino);
        assert!(session.request_start().is_none());
        assert!(session.error_message().is_some());
    }

    #[test]
    fn start_is_ignored_outside_configuring() {
        let mut session = configured(1, QuizMode::Treino);
        session.request_start();
        assert!(session.request_start().is_none());
        assert!(session.is_loading());
    }

    fn wait_for(app: &mut QuizApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_generation_pending() && Instant::now() < deadline {
            app.poll_generation();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn app_generates_in_background() {
        let mut app = QuizApp::with_source(Arc::new(FakeSource { fail: false }));
        app.session.config.count = 4;
        app.start_quiz();
        assert!(app.session.is_loading());

        wait_for(&mut app);
        assert!(!app.is_generation_pending());
        assert_eq!(app.session.quiz().map(|q| q.len()), Some(4));
    }

    #[test]
    fn app_reports_background_failure() {
        let mut app = QuizApp::with_source(Arc::new(FakeSource { fail: true }));
        app.start_quiz();
        wait_for(&mut app);
        assert_eq!(app.session.error_message(), Some(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn dead_worker_counts_as_failure() {
        let mut app = QuizApp::with_source(Arc::new(PanickingSource));
        app.start_quiz();
        wait_for(&mut app);
        assert!(!app.session.is_loading());
        assert_eq!(app.session.error_message(), Some(GENERATION_FAILED_MESSAGE));
    }
}
