//! Gallery application showing every component in one page.

use crate::components::icons::{BellIcon, ChevronDownIcon, SearchIcon, VolumeIcon};
use crate::components::*;
use crate::core::toast::{ToastDraft, ToastPosition, ToastVariant};
use crate::core::variants::{
    AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, CardVariant, ContainerSize,
    DropdownAlign, FieldVariant, FooterVariant, Justify, MediaVariant, NavbarPosition,
    SeparatorGlyph, StackDirection, Surface,
};
use crate::hooks::{use_sidebar, use_toast};
use yew::prelude::*;

const PAGE_COUNT: usize = 5;

#[function_component(GalleryApp)]
fn gallery_app() -> Html {
    html! {
        <ThemeProvider>
            <div class="min-h-screen bg-background text-foreground">
                <GalleryNavbar />
                <div class="flex">
                    <GallerySidebar />
                    <main class="flex-1">
                        <Container size={ContainerSize::Xl} class="py-8">
                            <Stack gap={8}>
                                <GalleryBreadcrumb />
                                <FormsSection />
                                <FeedbackSection />
                                <DisclosureSection />
                                <OverlaySection />
                                <MediaSection />
                                <PagingSection />
                            </Stack>
                        </Container>
                    </main>
                </div>
                <GalleryFooter />
            </div>
        </ThemeProvider>
    }
}

#[function_component(GalleryNavbar)]
fn gallery_navbar() -> Html {
    html! {
        <Navbar position={NavbarPosition::Sticky}>
            <NavbarBrand logo={html! { <div class="h-8 w-8 rounded-lg bg-primary" /> }}>
                { "Dark Blue" }
            </NavbarBrand>
            <NavbarSearch />
            <NavbarActions>
                <ThemeToggle />
                <NavbarIconButton badge={Some(128)} aria_label={AttrValue::from("Notifications")}>
                    <BellIcon class={classes!("h-5", "w-5")} />
                </NavbarIconButton>
                <NavbarUser name="ada lovelace" role={AttrValue::from("Administrator")} />
            </NavbarActions>
        </Navbar>
    }
}

#[function_component(GallerySidebar)]
fn gallery_sidebar() -> Html {
    let active = use_state(|| "overview".to_string());
    let item = |key: &'static str, label: &'static str| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(key.to_string()))
        };
        html! {
            <SidebarItem
                label={label}
                active={*active == key}
                icon={html! { <SearchIcon /> }}
                {onclick}
            />
        }
    };

    html! {
        <Sidebar class="min-h-[calc(100vh-4rem)]">
            <SidebarHeader>
                <span class="font-semibold">{ "Components" }</span>
            </SidebarHeader>
            <SidebarContent>
                <SidebarSection title={AttrValue::from("Library")}>
                    { item("overview", "Overview") }
                    { item("forms", "Forms") }
                    { item("overlays", "Overlays") }
                </SidebarSection>
                <CompactModeItem />
            </SidebarContent>
            <SidebarFooter>
                <SidebarToggle />
            </SidebarFooter>
        </Sidebar>
    }
}

/// Collapses the rail from inside it.
#[function_component(CompactModeItem)]
fn compact_mode_item() -> Html {
    let sidebar = use_sidebar();
    if sidebar.collapsed() {
        return Html::default();
    }
    let onclick = Callback::from(move |_: MouseEvent| sidebar.set_collapsed(true));

    html! {
        <SidebarSection title={AttrValue::from("View")}>
            <SidebarItem label="Compact mode" icon={html! { <ChevronDownIcon /> }} {onclick} />
        </SidebarSection>
    }
}

#[function_component(GalleryBreadcrumb)]
fn gallery_breadcrumb() -> Html {
    html! {
        <Breadcrumb>
            <BreadcrumbList>
                <BreadcrumbItem>
                    <BreadcrumbLink href="#">{ "Home" }</BreadcrumbLink>
                </BreadcrumbItem>
                <BreadcrumbSeparator variant={SeparatorGlyph::Chevron} />
                <BreadcrumbItem>
                    <BreadcrumbLink href="#components">{ "Components" }</BreadcrumbLink>
                </BreadcrumbItem>
                <BreadcrumbSeparator />
                <BreadcrumbItem>
                    <BreadcrumbPage>{ "Gallery" }</BreadcrumbPage>
                </BreadcrumbItem>
            </BreadcrumbList>
        </Breadcrumb>
    }
}

#[function_component(FormsSection)]
fn forms_section() -> Html {
    let email = use_state(String::new);
    let accepted = use_state(|| false);
    let plan = use_state(|| "monthly".to_string());

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_accept = {
        let accepted = accepted.clone();
        Callback::from(move |checked: bool| accepted.set(checked))
    };
    let on_plan = {
        let plan = plan.clone();
        Callback::from(move |value: String| plan.set(value))
    };
    let email_variant = if email.is_empty() || email.contains('@') {
        FieldVariant::Default
    } else {
        FieldVariant::Error
    };

    html! {
        <Card>
            <CardHeader>
                <CardTitle>{ "Forms" }</CardTitle>
                <CardDescription>{ "Inputs, choices and buttons." }</CardDescription>
            </CardHeader>
            <CardContent>
                <Grid cols={2} gap={6}>
                    <Stack gap={2}>
                        <Label html_for={AttrValue::from("email")} error={email_variant == FieldVariant::Error}>
                            { "Email" }
                        </Label>
                        <Input
                            id={AttrValue::from("email")}
                            value={AttrValue::from((*email).clone())}
                            placeholder={AttrValue::from("you@example.com")}
                            variant={email_variant}
                            oninput={on_email}
                        />
                    </Stack>
                    <Stack gap={2}>
                        <Label html_for={AttrValue::from("password")}>{ "Password" }</Label>
                        <PasswordInput id={AttrValue::from("password")} />
                    </Stack>
                    <Stack gap={2}>
                        <Label html_for={AttrValue::from("plan")}>{ "Plan" }</Label>
                        <Select
                            id={AttrValue::from("plan")}
                            value={AttrValue::from((*plan).clone())}
                            onchange={on_plan}
                        >
                            <option value="monthly">{ "Monthly" }</option>
                            <option value="yearly">{ "Yearly" }</option>
                        </Select>
                    </Stack>
                    <Stack gap={2}>
                        <Label html_for={AttrValue::from("notes")}>{ "Notes" }</Label>
                        <Textarea id={AttrValue::from("notes")} />
                    </Stack>
                </Grid>
                <Stack direction={StackDirection::Row} gap={4} class="mt-6">
                    <Checkbox id={AttrValue::from("terms")} checked={*accepted} onchange={on_accept} />
                    <Label html_for={AttrValue::from("terms")}>{ "Accept terms" }</Label>
                    <Radio name={AttrValue::from("size")} value={AttrValue::from("s")} />
                    <Radio name={AttrValue::from("size")} value={AttrValue::from("l")} />
                </Stack>
            </CardContent>
            <CardFooter>
                <Stack direction={StackDirection::Row} gap={2} justify={Justify::End} class="w-full">
                    <Button variant={ButtonVariant::Ghost}>{ "Cancel" }</Button>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Sm}>{ "Draft" }</Button>
                    <Button disabled={!*accepted}>{ "Submit" }</Button>
                </Stack>
            </CardFooter>
        </Card>
    }
}

#[function_component(FeedbackSection)]
fn feedback_section() -> Html {
    let dismissed = use_state(|| false);
    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    html! {
        <Card variant={CardVariant::Elevated} surface={Surface::Raised}>
            <CardHeader>
                <CardTitle>{ "Feedback" }</CardTitle>
            </CardHeader>
            <CardContent>
                <Stack gap={4}>
                    <Stack direction={StackDirection::Row} gap={2} wrap=true>
                        <Badge>{ "Default" }</Badge>
                        <Badge variant={BadgeVariant::Success}>{ "Seeding" }</Badge>
                        <Badge variant={BadgeVariant::Warning}>{ "Stalled" }</Badge>
                        <Badge variant={BadgeVariant::DestructiveSubtle}>{ "Failed" }</Badge>
                    </Stack>
                    if !*dismissed {
                        <Alert variant={AlertVariant::Warning}>
                            <AlertContent>
                                <AlertTitle>{ "Heads up" }</AlertTitle>
                                <AlertDescription>{ "Storage is almost full." }</AlertDescription>
                            </AlertContent>
                            <AlertClose onclick={on_dismiss} />
                        </Alert>
                    }
                    <Skeleton class="h-4 w-48" />
                </Stack>
            </CardContent>
        </Card>
    }
}

#[function_component(DisclosureSection)]
fn disclosure_section() -> Html {
    let slide = use_state(|| 0_usize);
    let on_slide = {
        let slide = slide.clone();
        Callback::from(move |index: usize| slide.set(index))
    };

    html! {
        <Grid cols={2} gap={6}>
            <Card variant={CardVariant::Outline}>
                <CardHeader><CardTitle>{ "Accordion" }</CardTitle></CardHeader>
                <CardContent>
                    <Accordion default_value={vec!["shipping".to_string()]}>
                        <AccordionItem value="shipping">
                            <AccordionTrigger>{ "Shipping" }</AccordionTrigger>
                            <AccordionContent>{ "Ships within two days." }</AccordionContent>
                        </AccordionItem>
                        <AccordionItem value="returns">
                            <AccordionTrigger>{ "Returns" }</AccordionTrigger>
                            <AccordionContent>{ "Thirty day return window." }</AccordionContent>
                        </AccordionItem>
                    </Accordion>
                </CardContent>
            </Card>
            <Card variant={CardVariant::Outline}>
                <CardHeader><CardTitle>{ "Tabs" }</CardTitle></CardHeader>
                <CardContent>
                    <Tabs default_value={Some("account".to_string())}>
                        <TabsList>
                            <TabsTrigger value="account">{ "Account" }</TabsTrigger>
                            <TabsTrigger value="billing">{ "Billing" }</TabsTrigger>
                            <TabsTrigger value="audit" disabled=true>{ "Audit" }</TabsTrigger>
                        </TabsList>
                        <TabsContent value="account">{ "Profile settings." }</TabsContent>
                        <TabsContent value="billing">{ "Invoices and payment methods." }</TabsContent>
                    </Tabs>
                </CardContent>
            </Card>
            <Card variant={CardVariant::Glow} class="col-span-2">
                <CardHeader>
                    <CardTitle>{ "Carousel" }</CardTitle>
                    <CardDescription>{ format!("Slide {} of 3", *slide + 1) }</CardDescription>
                </CardHeader>
                <CardContent>
                    <Carousel looping=true on_index_change={on_slide}>
                        <CarouselContent>
                            <CarouselItem class="h-40 bg-primary/20">{ "First" }</CarouselItem>
                            <CarouselItem class="h-40 bg-primary/40">{ "Second" }</CarouselItem>
                            <CarouselItem class="h-40 bg-primary/60">{ "Third" }</CarouselItem>
                        </CarouselContent>
                        <CarouselPrevious />
                        <CarouselNext />
                        <CarouselIndicators />
                    </Carousel>
                </CardContent>
            </Card>
        </Grid>
    }
}

#[function_component(OverlaySection)]
fn overlay_section() -> Html {
    let toasts = use_toast();
    let notify = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            toasts.toast(
                ToastDraft::new(ToastVariant::Success, "Saved")
                    .with_description("Your changes are live."),
            );
        })
    };

    html! {
        <Card variant={CardVariant::Gradient}>
            <CardHeader><CardTitle>{ "Overlays" }</CardTitle></CardHeader>
            <CardContent>
                <Stack direction={StackDirection::Row} gap={4}>
                    <Dropdown>
                        <DropdownTrigger class="gap-1 rounded-md border px-3 py-2 text-sm">
                            { "Options" }
                            <ChevronDownIcon />
                        </DropdownTrigger>
                        <DropdownContent align={DropdownAlign::Start}>
                            <DropdownItem>{ "Rename" }</DropdownItem>
                            <DropdownItem>{ "Duplicate" }</DropdownItem>
                            <DropdownSeparator />
                            <DropdownItem class="text-destructive">{ "Delete" }</DropdownItem>
                        </DropdownContent>
                    </Dropdown>
                    <Modal>
                        <ModalTrigger class="rounded-md border px-3 py-2 text-sm">{ "Open dialog" }</ModalTrigger>
                        <ModalOverlay />
                        <ModalContent>
                            <ModalHeader>
                                <ModalTitle>{ "Delete project?" }</ModalTitle>
                                <ModalDescription>{ "This cannot be undone." }</ModalDescription>
                            </ModalHeader>
                            <ModalFooter>
                                <Button variant={ButtonVariant::Destructive}>{ "Delete" }</Button>
                            </ModalFooter>
                            <ModalClose />
                        </ModalContent>
                    </Modal>
                    <Button variant={ButtonVariant::Secondary} onclick={notify}>{ "Show toast" }</Button>
                </Stack>
            </CardContent>
            <Toaster handle={toasts} position={ToastPosition::BottomRight} />
        </Card>
    }
}

#[function_component(MediaSection)]
fn media_section() -> Html {
    let playing = use_state(|| false);
    let on_play = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(!*playing))
    };

    html! {
        <Grid cols={2} gap={6}>
            <MediaPlayer>
                <MediaPlayerDisplay>
                    <MediaPlayerOverlay>
                        <MediaPlayerInfo>
                            <MediaPlayerTitle class="text-white">{ "Night Drive" }</MediaPlayerTitle>
                            <MediaPlayerSubtitle>{ "Episode 4" }</MediaPlayerSubtitle>
                        </MediaPlayerInfo>
                        <Stack gap={3}>
                            <MediaPlayerScrubber progress={42.0} />
                            <Stack direction={StackDirection::Row} justify={Justify::Between}>
                                <MediaPlayerPlayButton playing={*playing} onclick={on_play.clone()} />
                                <MediaPlayerTime class="text-white">{ "12:40 / 30:00" }</MediaPlayerTime>
                            </Stack>
                        </Stack>
                    </MediaPlayerOverlay>
                </MediaPlayerDisplay>
            </MediaPlayer>
            <MediaPlayer variant={MediaVariant::Audio}>
                <MediaPlayerControls>
                    <MediaPlayerInfo>
                        <MediaPlayerTitle>{ "Blue Hour" }</MediaPlayerTitle>
                        <MediaPlayerSubtitle>{ "Ambient Set" }</MediaPlayerSubtitle>
                    </MediaPlayerInfo>
                    <MediaPlayerScrubber progress={140.0} />
                    <Stack direction={StackDirection::Row} justify={Justify::Between}>
                        <MediaPlayerPlayButton playing={*playing} variant={MediaVariant::Audio} onclick={on_play} />
                        <MediaPlayerButton aria_label={AttrValue::from("Mute")}>
                            <VolumeIcon />
                        </MediaPlayerButton>
                        <MediaPlayerVolume />
                    </Stack>
                </MediaPlayerControls>
            </MediaPlayer>
        </Grid>
    }
}

#[function_component(PagingSection)]
fn paging_section() -> Html {
    let page = use_state(|| 1_usize);
    let go = |target: usize| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };
    let links = (1..=PAGE_COUNT).map(|number| {
        html! {
            <PaginationItem key={number.to_string()}>
                <PaginationLink active={*page == number} onclick={go(number)}>
                    { number.to_string() }
                </PaginationLink>
            </PaginationItem>
        }
    });

    html! {
        <Pagination>
            <PaginationContent>
                <PaginationItem>
                    <PaginationPrevious disabled={*page == 1} onclick={go(page.saturating_sub(1).max(1))} />
                </PaginationItem>
                { for links }
                <PaginationItem><PaginationEllipsis /></PaginationItem>
                <PaginationItem>
                    <PaginationNext disabled={*page == PAGE_COUNT} onclick={go((*page + 1).min(PAGE_COUNT))} />
                </PaginationItem>
            </PaginationContent>
        </Pagination>
    }
}

#[function_component(GalleryFooter)]
fn gallery_footer() -> Html {
    html! {
        <Footer variant={FooterVariant::Minimal}>
            <Container>
                <Stack direction={StackDirection::Row} justify={Justify::Between}>
                    <FooterBrand>{ "Dark Blue" }</FooterBrand>
                    <FooterLinks>
                        <FooterLinkGroup title={AttrValue::from("Project")}>
                            <FooterLink href="#components">{ "Components" }</FooterLink>
                            <FooterLink href="#theming">{ "Theming" }</FooterLink>
                        </FooterLinkGroup>
                    </FooterLinks>
                    <FooterCopyright>{ "Released under the MIT license." }</FooterCopyright>
                </Stack>
            </Container>
        </Footer>
    }
}

/// Mount the gallery on the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<GalleryApp>::new().render();
}
